use std::path::PathBuf;
use crate::error::HarnessError;
use crate::sort::Algorithm;
use crate::distribution::Distribution;

pub const SIZE_FROM: usize = 10_000;
pub const SIZE_TO: usize = 100_000;
pub const SIZE_STEP: usize = 10_000;
pub const DATA_DIR: &str = "./data";
pub const STORE_EXTENSION: &str = "csv";

pub const COMB_SHRINK: f64 = 1.24733;
pub const RADIX_BITS: usize = 8;
pub const RADIX_BUCKETS: usize = 1 << RADIX_BITS;
pub const RADIX_PASSES: usize = size_of::<i32>() * 8 / RADIX_BITS;

const fn is_power_of_two(x: usize) -> bool {
    (x!=0) && ((x & (x-1)) == 0)
}

const _: () = {
    assert!(is_power_of_two(RADIX_BUCKETS), "RADIX_BUCKETS must be a power of two");
    assert!(RADIX_PASSES * RADIX_BITS == 32, "radix passes must cover every bit of an i32");
    assert!(SIZE_STEP > 0 && SIZE_FROM <= SIZE_TO);
};

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub from: usize,
    pub to: usize,
    pub step: usize,
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub keep_going: bool,
    pub algorithms: Vec<Algorithm>,
    pub distributions: Vec<Distribution>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            from: SIZE_FROM,
            to: SIZE_TO,
            step: SIZE_STEP,
            data_dir: PathBuf::from(DATA_DIR),
            seed: None,
            keep_going: false,
            algorithms: Algorithm::ALL.to_vec(),
            distributions: Distribution::ALL.to_vec(),
        }
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.step == 0 || self.from == 0 || self.from > self.to {
            return Err(HarnessError::InvalidSizeRange {
                from: self.from,
                to: self.to,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Input sizes in the order they are run, `from..=to` by `step`.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.from..=self.to).step_by(self.step.max(1))
    }

    /// Selected algorithms in registry order, regardless of the order they were requested in.
    pub fn selected_algorithms(&self) -> Vec<Algorithm> {
        Algorithm::ALL.into_iter().filter(|a| self.algorithms.contains(a)).collect()
    }

    pub fn selected_distributions(&self) -> Vec<Distribution> {
        Distribution::ALL.into_iter().filter(|d| self.distributions.contains(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes() {
        let sizes: Vec<usize> = HarnessConfig::default().sizes().collect();
        assert_eq!(sizes.len(), 10);
        assert_eq!(sizes[0], 10_000);
        assert_eq!(sizes[9], 100_000);
    }

    #[test]
    fn rejects_zero_step() {
        let config = HarnessConfig { step: 0, ..HarnessConfig::default() };
        assert!(matches!(config.validate(), Err(HarnessError::InvalidSizeRange { step: 0, .. })));
    }

    #[test]
    fn rejects_inverted_range() {
        let config = HarnessConfig { from: 20, to: 10, ..HarnessConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn selection_keeps_registry_order() {
        let config = HarnessConfig {
            algorithms: vec![Algorithm::Radix, Algorithm::Bubble],
            distributions: vec![Distribution::Descending, Distribution::Random],
            ..HarnessConfig::default()
        };
        assert_eq!(config.selected_algorithms(), vec![Algorithm::Bubble, Algorithm::Radix]);
        assert_eq!(config.selected_distributions(), vec![Distribution::Random, Distribution::Descending]);
    }
}
