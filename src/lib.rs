pub mod sort;
pub mod harness;
pub mod record;
mod config;
mod conversion;
mod distribution;
mod error;
mod gapped;
mod quadratic;
mod radix;
mod validate;

pub use config::*;
pub use conversion::{dump, key_byte};
pub use distribution::Distribution;
pub use error::{HarnessError, HarnessResult};
pub use gapped::{comb_sort, next_comb_gap, shell_gaps, shell_sort};
pub use harness::{verify, Harness, Summary};
pub use quadratic::{bubble_sort, insertion_sort, selection_sort};
pub use radix::radix_sort;
pub use record::{store_name, Measurement, RecordSink};
pub use sort::Algorithm;
pub use validate::{first_inversion, is_ordered};
