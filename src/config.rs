//! Pipeline Configuration
//!
//! `{distribution, params, count, seed}` as JSON. Missing fields fall back to
//! the exploration defaults: Weibull(shape 0.6), 82 records, unseeded.

use crate::data::DistributionSpec;
use crate::error::DiversityError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_DISTRIBUTION: &str = "weibull";
pub const DEFAULT_WEIBULL_SHAPE: f64 = 0.6;
pub const DEFAULT_SAMPLE_COUNT: usize = 82;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "diversity_config.json";

/// Sample generation settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Distribution name, see `DistributionSpec::from_config`
    pub distribution: String,
    pub params: Vec<f64>,
    pub count: usize,
    /// RNG seed; drawn at random (and logged) when absent
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            distribution: DEFAULT_DISTRIBUTION.to_string(),
            params: vec![DEFAULT_WEIBULL_SHAPE],
            count: DEFAULT_SAMPLE_COUNT,
            seed: None,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: PipelineConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;

        config
            .distribution_spec()
            .with_context(|| format!("Invalid distribution in {:?}", path))?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::info!("Loading config: {:?}", path);
            Self::load(path)
        } else {
            tracing::info!("No config at {:?} - using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate name + params into a distribution
    pub fn distribution_spec(&self) -> std::result::Result<DistributionSpec, DiversityError> {
        if self.count == 0 {
            return Err(DiversityError::EmptySample);
        }
        DistributionSpec::from_config(&self.distribution, &self.params)
    }
}
