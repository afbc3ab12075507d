use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Run #{run}: {store} (n = {size}) produced unsorted output")]
    Validation {
        run: u64,
        store: String,
        size: usize,
        dump: String,
    },

    #[error("Cannot open record store '{store}': {source}")]
    StoreOpen {
        store: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write to record store '{store}': {source}")]
    StoreWrite {
        store: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid size range {from}..={to} step {step}")]
    InvalidSizeRange { from: usize, to: usize, step: usize },
}

pub type HarnessResult<T> = Result<T, HarnessError>;
