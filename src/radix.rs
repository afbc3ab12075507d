use crate::config::{RADIX_BUCKETS, RADIX_PASSES};
use crate::conversion::key_byte;

/// LSD radix sort over the four bytes of each value's bit pattern.
///
/// Orders by the unsigned interpretation of the bits, so negative values end up after all
/// non-negative ones. Makes no element comparisons.
pub fn radix_sort(arr: &mut [i32]) {
    if arr.len() < 2 {
        return;
    }
    let mut scratch: Vec<i32> = vec![0; arr.len()];
    let mut counts = [0usize; RADIX_BUCKETS];

    for pass in 0..RADIX_PASSES {
        counting_pass(arr, &mut scratch, &mut counts, pass);
        arr.copy_from_slice(&scratch);
    }
}

/// Stable counting sort of `src` into `dst` keyed by byte `pass`.
fn counting_pass(src: &[i32], dst: &mut [i32], counts: &mut [usize; RADIX_BUCKETS], pass: usize) {
    counts.fill(0);
    for &x in src {
        counts[key_byte(x, pass)] += 1;
    }

    // exclusive prefix sum: bucket start offsets
    let mut sum = 0;
    for count in counts.iter_mut() {
        let start = sum;
        sum += *count;
        *count = start;
    }

    for &x in src {
        let bucket = key_byte(x, pass);
        dst[counts[bucket]] = x;
        counts[bucket] += 1;
    }
}
