use std::time::{Instant, SystemTime, UNIX_EPOCH};
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::config::HarnessConfig;
use crate::conversion::dump;
use crate::distribution::Distribution;
use crate::error::{HarnessError, HarnessResult};
use crate::record::{store_name, Measurement, RecordSink};
use crate::sort::Algorithm;
use crate::validate::first_inversion;

const FALLBACK_SEED: u64 = 12345;

#[derive(Debug, Default)]
pub struct Summary {
    pub runs: u64,
    pub failures: Vec<HarnessError>,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives every (size, algorithm, distribution) combination: generate, sort under a timer,
/// validate, record.
pub struct Harness {
    config: HarnessConfig,
    sink: RecordSink,
    rng: StdRng,
    buffer: Vec<i32>,
    run_counter: u64,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> HarnessResult<Harness> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(clock_seed);
        info!("Seed: {}", seed);
        debug!("Config: {:?}", config);
        Ok(Harness {
            sink: RecordSink::new(config.data_dir.clone()),
            rng: StdRng::seed_from_u64(seed),
            buffer: Vec::with_capacity(config.to),
            run_counter: 0,
            config,
        })
    }

    pub fn runs(&self) -> u64 {
        self.run_counter
    }

    pub fn sink(&self) -> &RecordSink {
        &self.sink
    }

    pub fn run(&mut self) -> HarnessResult<Summary> {
        self.run_with(Algorithm::sort)
    }

    /// `run` with the sorting step supplied by the caller.
    pub(crate) fn run_with<F>(&mut self, sort: F) -> HarnessResult<Summary>
    where
        F: Fn(Algorithm, &mut [i32]) -> Option<u64>,
    {
        self.sink.prepare()?;
        let algorithms = self.config.selected_algorithms();
        let distributions = self.config.selected_distributions();
        let mut summary = Summary::default();

        for size in self.config.sizes() {
            info!("------------------------------");
            info!("Size: {}", size);
            for &algorithm in &algorithms {
                for &distribution in &distributions {
                    match self.run_one_with(size, algorithm, distribution, &sort) {
                        Ok(_) => {}
                        Err(err @ HarnessError::Validation { .. }) if self.config.keep_going => {
                            warn!("Continuing after failed run #{}", self.run_counter);
                            summary.failures.push(err);
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
        }

        summary.runs = self.run_counter;
        if summary.is_success() {
            info!("All {} runs passed", summary.runs);
        } else {
            error!("{} of {} runs failed", summary.failures.len(), summary.runs);
        }
        Ok(summary)
    }

    /// One generate/sort/validate/persist cycle. The sort is the only timed step.
    pub fn run_one(&mut self, size: usize, algorithm: Algorithm, distribution: Distribution) -> HarnessResult<Measurement> {
        self.run_one_with(size, algorithm, distribution, &Algorithm::sort)
    }

    fn run_one_with<F>(&mut self, size: usize, algorithm: Algorithm, distribution: Distribution, sort: &F) -> HarnessResult<Measurement>
    where
        F: Fn(Algorithm, &mut [i32]) -> Option<u64>,
    {
        self.run_counter += 1;
        let store = store_name(algorithm.name(), distribution.name());

        self.buffer.resize(size, 0);
        distribution.generate(&mut self.rng, &mut self.buffer);
        info!("Run #{}|Name: {} (n = {})", self.run_counter, store, size);

        let start = Instant::now();
        let comparisons = sort(algorithm, &mut self.buffer);
        let elapsed = start.elapsed();

        verify(self.run_counter, &store, &self.buffer)?;

        let record = Measurement::new(size, elapsed, comparisons);
        match comparisons {
            Some(c) => info!("Status: OK! Time: {:.3}s. Comparisons: {}", elapsed.as_secs_f64(), c),
            None => info!("Status: OK! Time: {:.3}s.", elapsed.as_secs_f64()),
        }
        self.sink.append(&store, &record)?;
        Ok(record)
    }
}

/// Checks a sort result. An unsorted sequence is logged in full and becomes a `Validation` error.
pub fn verify(run: u64, store: &str, arr: &[i32]) -> HarnessResult<()> {
    match first_inversion(arr) {
        None => Ok(()),
        Some(i) => {
            error!("Status: Wrong! {} > {} at index {}", arr[i - 1], arr[i], i);
            let dump = dump(arr);
            error!("{}", dump);
            Err(HarnessError::Validation {
                run,
                store: store.to_string(),
                size: arr.len(),
                dump,
            })
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(FALLBACK_SEED)
}
