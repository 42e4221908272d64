//! CLI definition using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::Parser;

/// Times insertion and lookup across vector, list, set and unordered set
#[derive(Parser, Debug)]
#[command(name = "ctbench")]
#[command(version)]
#[command(
    long_about = "Inserts a shuffled permutation of 1..=100,000 at the end and at the beginning of each container, then looks up keys 1..=10,000, printing each time relative to the vector's."
)]
pub struct Cli {
    /// Seed for the dataset shuffle (overrides the config file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
