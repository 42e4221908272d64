//! Run configuration.
//!
//! The only tunable is the shuffle seed. It can come from a TOML file, from
//! the command line, or be left unset for an entropy-seeded run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Configuration for a benchmark run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Seed for the dataset shuffle; `None` seeds from OS entropy
    seed: Option<u64>,
}

impl BenchConfig {
    /// Create a configuration with an optional fixed seed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ctbench_core::BenchConfig;
    /// let config = BenchConfig::new(Some(42));
    /// assert_eq!(config.seed(), Some(42));
    /// ```
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the text is not valid TOML, has
    /// unknown keys, or `seed` is not a non-negative integer.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The file cannot be read
    /// - The TOML is malformed or has unknown keys
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read_failed(path, e.to_string()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config_parse_failed(path, e.to_string()))?;

        tracing::debug!(path = %path.display(), seed = ?config.seed, "loaded config");
        Ok(config)
    }

    /// Replace the seed when `seed` is set, keeping the current one otherwise.
    #[must_use]
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        self
    }

    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}
