use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use log::debug;
use crate::config::STORE_EXTENSION;
use crate::error::{HarnessError, HarnessResult};

/// Result of one successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub size: usize,
    pub elapsed: Duration,
    pub comparisons: Option<u64>,
}

impl Measurement {
    pub fn new(size: usize, elapsed: Duration, comparisons: Option<u64>) -> Self {
        Measurement { size, elapsed, comparisons }
    }
}

/// `size; seconds[; comparisons]`
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {:.3}", self.size, self.elapsed.as_secs_f64())?;
        if let Some(comparisons) = self.comparisons {
            write!(f, "; {}", comparisons)?;
        }
        Ok(())
    }
}

pub fn store_name(algorithm: &str, distribution: &str) -> String {
    format!("{}_{}", algorithm, distribution)
}

/// Appends measurements as text lines to one file per store under `dir`.
#[derive(Debug, Clone)]
pub struct RecordSink {
    dir: PathBuf,
}

impl RecordSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        RecordSink { dir: dir.into() }
    }

    pub fn path_of(&self, store: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", store, STORE_EXTENSION))
    }

    /// Creates the store directory if it does not exist yet.
    pub fn prepare(&self) -> HarnessResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| HarnessError::StoreOpen {
            store: self.dir.display().to_string(),
            source,
        })
    }

    pub fn append(&self, store: &str, record: &Measurement) -> HarnessResult<()> {
        let path = self.path_of(store);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| HarnessError::StoreOpen { store: store.to_string(), source })?;
        writeln!(file, "{}", record)
            .map_err(|source| HarnessError::StoreWrite { store: store.to_string(), source })?;
        debug!("Appended '{}' to {}", record, path.display());
        Ok(())
    }
}
