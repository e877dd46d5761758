// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Survey configuration, loaded from TOML.
//!
//! ```toml
//! crossings = 5
//! exhaustive = false
//! parallel = true
//! output = "catalog.json"
//!
//! [seeds]
//! start = 1000
//! end = 1200
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use crate::generator::MAX_CROSSINGS;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

/// Half-open range of selector seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRange {
    pub start: u64,
    pub end: u64,
}

impl SeedRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn iter(&self) -> Range<u64> {
        self.start..self.end
    }
}

impl Default for SeedRange {
    fn default() -> Self {
        Self {
            start: 1000,
            end: 1200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Target crossing count for generated candidates.
    pub crossings: usize,
    /// Walk every leaf of the candidate tree instead of drawing seeds.
    pub exhaustive: bool,
    /// Validate and simplify candidates on the rayon thread pool.
    pub parallel: bool,
    /// Catalog JSON to resume from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Where to write the resulting catalog JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Seeds to draw candidates from. Ignored when `exhaustive` is set.
    pub seeds: SeedRange,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            crossings: 3,
            exhaustive: false,
            parallel: true,
            catalog: None,
            output: None,
            seeds: SeedRange::default(),
        }
    }
}

impl SurveyConfig {
    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: SurveyConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce any candidate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_crossings(self.crossings)?;
        if !self.exhaustive && self.seeds.is_empty() {
            return Err(ConfigError::Invalid {
                reason: format!("empty seed range {}..{}", self.seeds.start, self.seeds.end),
            });
        }
        Ok(())
    }
}

/// Check a target crossing count is within `1..=MAX_CROSSINGS`.
pub fn check_crossings(crossings: usize) -> Result<(), ConfigError> {
    if crossings == 0 {
        return Err(ConfigError::Invalid {
            reason: "crossings must be at least 1".to_string(),
        });
    }
    if crossings > MAX_CROSSINGS {
        return Err(ConfigError::Invalid {
            reason: format!("crossings {} exceeds the maximum {}", crossings, MAX_CROSSINGS),
        });
    }
    Ok(())
}
