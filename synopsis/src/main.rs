// src/main.rs
use anyhow::Result;
use clap::Parser as _;

use synopsis::{Args, run};

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    run(args)
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("synopsis=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
