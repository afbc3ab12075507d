use crate::config::{RADIX_BITS, RADIX_BUCKETS};

/// Byte `pass` (0 = least significant) of the two's-complement bit pattern of `value`.
#[inline(always)]
pub fn key_byte(value: i32, pass: usize) -> usize {
    ((value as u32 >> (pass * RADIX_BITS)) as usize) & (RADIX_BUCKETS - 1)
}

pub fn dump(arr: &[i32]) -> String {
    let mut res = String::with_capacity(arr.len() * 7);
    for (i, x) in arr.iter().enumerate() {
        if i > 0 {
            res.push(' ');
        }
        res.push_str(&x.to_string());
    }
    res
}
