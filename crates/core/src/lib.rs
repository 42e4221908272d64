#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # ctbench-core
//!
//! Times single-value insertion at either end and lookup of keys
//! `1..=10_000` across `Vec`, `LinkedList`, `BTreeSet` and `HashSet`,
//! reporting each result relative to the vector's time.
//!
//! ```
//! use ctbench_core::{BenchConfig, BenchRunner};
//!
//! let mut out = Vec::new();
//! BenchRunner::new(BenchConfig::new(Some(1)))
//!     .with_dataset_size(500)
//!     .run(&mut out)
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 14);
//! ```

pub mod config;
pub mod container;
pub mod dataset;
pub mod error;
pub mod insert;
pub mod lookup;
pub mod percent;
pub mod report;
pub mod result;
pub mod runner;
pub mod timer;

pub use config::BenchConfig;
pub use container::{
    ContainerKind, Containers, InsertTarget, MembershipQuery, Operation, Position,
};
pub use dataset::{DATASET_SIZE, Dataset};
pub use error::Error;
pub use insert::time_insertion;
pub use lookup::{LOOKUP_KEYS, time_linear_lookup, time_native_lookup};
pub use percent::percent_relative;
pub use report::{Measurement, Reporter, format_result};
pub use result::Result;
pub use runner::{BenchRunner, RunSummary};
pub use timer::{Millis, time_millis};
