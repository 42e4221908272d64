//! # ctbench
//!
//! Prints 14 lines to stdout: insertion at the end, a blank line, insertion
//! at the beginning, a blank line, then lookups, each for vector, list, set
//! and unordered set. Diagnostics go to stderr through `tracing`; set
//! `RUST_LOG=info` to see each measurement as it is taken.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

mod cli;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ctbench_core::{BenchConfig, BenchRunner};

use crate::cli::Cli;

fn main() {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => BenchConfig::load(path).context("could not load configuration")?,
        None => BenchConfig::default(),
    }
    .with_seed_override(cli.seed);
    tracing::debug!(seed = ?config.seed(), "configuration resolved");

    let stdout = io::stdout();
    BenchRunner::new(config)
        .run(stdout.lock())
        .context("benchmark run failed")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
