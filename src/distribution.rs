use std::fmt;
use std::str::FromStr;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    Random,
    Ascending,
    Descending,
}

impl Distribution {
    /// Registry in execution order.
    pub const ALL: [Distribution; 3] = [
        Distribution::Random,
        Distribution::Ascending,
        Distribution::Descending,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Ascending => "ascending",
            Distribution::Descending => "descending",
        }
    }

    /// Overwrites every element of `arr`.
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R, arr: &mut [i32]) {
        match self {
            Distribution::Random => generate_random(rng, arr),
            Distribution::Ascending => generate_ascending(arr),
            Distribution::Descending => generate_descending(arr),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Distribution::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| format!("unknown distribution '{}'", s))
    }
}

// non-negative, like libc rand()
fn generate_random<R: Rng + ?Sized>(rng: &mut R, arr: &mut [i32]) {
    for x in arr.iter_mut() {
        *x = rng.gen_range(0..=i32::MAX);
    }
}

// 0, 1, ..., n - 1
fn generate_ascending(arr: &mut [i32]) {
    for (i, x) in arr.iter_mut().enumerate() {
        *x = i as i32;
    }
}

// n, n - 1, ..., 1
fn generate_descending(arr: &mut [i32]) {
    let n = arr.len();
    for (i, x) in arr.iter_mut().enumerate() {
        *x = (n - i) as i32;
    }
}
