use std::path::PathBuf;
use std::process;
use clap::Parser;
use log::{error, info, LevelFilter};
use sortbench::{Algorithm, Distribution, Harness, HarnessConfig, DATA_DIR, SIZE_FROM, SIZE_STEP, SIZE_TO};

#[derive(Parser)]
#[command(name = "sortbench")]
#[command(version = "0.1.0")]
#[command(about = "Times and validates classic in-place integer sorts over generated inputs", long_about = None)]
struct Cli {
    /// Smallest input size
    #[arg(long, default_value_t = SIZE_FROM)]
    from: usize,

    /// Largest input size (inclusive)
    #[arg(long, default_value_t = SIZE_TO)]
    to: usize,

    #[arg(long, default_value_t = SIZE_STEP)]
    step: usize,

    /// Directory holding one record file per algorithm/distribution pair
    #[arg(short, long, default_value = DATA_DIR)]
    data_dir: PathBuf,

    /// Seed for the random distribution. Taken from the clock if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Only run these algorithms (e.g. bubble, shellSort). Repeatable.
    #[arg(short, long = "algorithm")]
    algorithms: Vec<Algorithm>,

    /// Only run these distributions (random, ascending, descending). Repeatable.
    #[arg(short = 'D', long = "distribution")]
    distributions: Vec<Distribution>,

    /// Keep running after a validation failure and report all failures at the end
    #[arg(short, long)]
    keep_going: bool,
}

impl Cli {
    fn into_config(self) -> HarnessConfig {
        let defaults = HarnessConfig::default();
        HarnessConfig {
            from: self.from,
            to: self.to,
            step: self.step,
            data_dir: self.data_dir,
            seed: self.seed,
            keep_going: self.keep_going,
            algorithms: if self.algorithms.is_empty() { defaults.algorithms } else { self.algorithms },
            distributions: if self.distributions.is_empty() { defaults.distributions } else { self.distributions },
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Cli::parse().into_config();

    let summary = Harness::new(config).and_then(|mut harness| harness.run());
    match summary {
        Ok(summary) if summary.is_success() => {
            info!("Done after {} runs", summary.runs);
        }
        Ok(summary) => {
            for failure in &summary.failures {
                error!("{}", failure);
            }
            process::exit(1);
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
