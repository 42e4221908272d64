//! Error types for benchmark setup and reporting.
//!
//! The measurement loops themselves cannot fail; errors only come from
//! configuration, dataset construction and writing the report.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for ctbench operations.
#[derive(Debug, Error)]
pub enum Error {
    // Configuration errors
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("failed to read config file '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("failed to parse config file '{path}': {reason}")]
    ConfigParseFailed { path: PathBuf, reason: String },

    // Dataset errors
    #[error("dataset size {size} is out of range (1..={max})")]
    DatasetSizeOutOfRange { size: usize, max: usize },

    // Report output
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a config read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a dataset size error.
    #[must_use]
    pub const fn dataset_size_out_of_range(size: usize, max: usize) -> Self {
        Self::DatasetSizeOutOfRange { size, max }
    }
}
