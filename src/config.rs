//! Run configuration.
//!
//! Controls how many variations are generated and the (currently inert)
//! run-length limit. Loadable from TOML; every field has a default.
//!
//! ```
//! use running_order::config::RunConfig;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     variations = 5
//!     first_seed = 10
//! "#).unwrap();
//!
//! assert_eq!(config.variations, 5);
//! assert_eq!(config.max_in_row, 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RunningOrderError};

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned text tables.
    #[default]
    Text,
    /// JSON documents.
    Json,
}

/// Parameters for a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RunConfig {
    /// Longest allowed run for a performer. Threaded through selection
    /// and scoring but not enforced.
    pub max_in_row: usize,

    /// Number of variations to generate.
    pub variations: usize,

    /// Seed of the first variation; later ones count up from here.
    pub first_seed: u64,

    /// Rendering format.
    pub output: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_in_row: 1,
            variations: 3,
            first_seed: 0,
            output: OutputFormat::Text,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_in_row(mut self, max_in_row: usize) -> Self {
        self.max_in_row = max_in_row;
        self
    }

    pub fn with_variations(mut self, variations: usize) -> Self {
        self.variations = variations;
        self
    }

    pub fn with_first_seed(mut self, seed: u64) -> Self {
        self.first_seed = seed;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Both tunables must be positive, and every seed must fit in a `u64`.
    pub fn validate(&self) -> Result<()> {
        if self.max_in_row == 0 {
            return Err(RunningOrderError::Config(
                "max_in_row must be at least 1".into(),
            ));
        }
        if self.variations == 0 {
            return Err(RunningOrderError::Config(
                "variations must be at least 1".into(),
            ));
        }
        let span = (self.variations - 1) as u64;
        if self.first_seed.checked_add(span).is_none() {
            return Err(RunningOrderError::Config(format!(
                "first_seed {} leaves no room for {} variations",
                self.first_seed, self.variations
            )));
        }
        Ok(())
    }

    /// Seeds for every variation, in order.
    pub fn seeds(&self) -> impl Iterator<Item = u64> {
        let first = self.first_seed;
        (0..self.variations as u64).map(move |offset| first.wrapping_add(offset))
    }
}
