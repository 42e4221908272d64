//! Result type definition.

use crate::error::Error;

/// The standard Result type for ctbench operations.
///
/// Use the `?` operator or `match` to handle results; production code never
/// unwraps.
///
/// # Examples
///
/// ```
/// use ctbench_core::{BenchConfig, Result};
///
/// fn seed_of(config: &BenchConfig) -> Result<Option<u64>> {
///     Ok(config.seed())
/// }
///
/// assert!(seed_of(&BenchConfig::default()).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
