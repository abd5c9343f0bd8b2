//! Benchmark runner for the matrix and shared-counter trials.

use std::io::{self, Write};

use threadbench::{BenchConfig, run_all};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> threadbench::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = BenchConfig::default().with_seed(rand::random());
    info!(seed = config.seed, n = config.matrix_size, "starting benchmark");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_all(&config, &mut out)?;
    out.flush()?;

    Ok(())
}
