//! Configuration for a play session.

use std::path::Path;

use engine_core::Oscillation;
use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};
use crate::stats::StatBlock;

/// Parameters of the shake played on a page when a choice has an effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillationConfig {
    /// Peak offset of the shake.
    pub magnitude: f32,
    /// Oscillations per cycle span.
    pub frequency: f32,
    /// Length of the shake in frames.
    pub cycles: u32,
}

impl Default for OscillationConfig {
    fn default() -> Self {
        Self {
            magnitude: 2.0,
            frequency: 4.0,
            cycles: 60,
        }
    }
}

impl OscillationConfig {
    /// A fresh oscillation with these parameters.
    pub fn build(&self) -> Oscillation {
        Oscillation::new(self.magnitude, self.frequency, self.cycles)
    }
}

/// Configuration for a dialogue session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Stat totals before any choice is made.
    pub initial_stats: StatBlock,
    pub oscillation: OscillationConfig,
}

impl SessionConfig {
    /// Parse a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> StoryResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Set the starting stat totals.
    pub fn with_initial_stats(mut self, stats: StatBlock) -> Self {
        self.initial_stats = stats;
        self
    }

    /// Set the effect shake parameters.
    pub fn with_oscillation(mut self, oscillation: OscillationConfig) -> Self {
        self.oscillation = oscillation;
        self
    }
}
