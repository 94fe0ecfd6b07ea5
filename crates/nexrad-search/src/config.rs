//! Search configuration, loadable from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use nexrad_common::{NexradError, NexradResult};
use storage::ObjectStorageConfig;

use crate::download::DEFAULT_MAX_CONCURRENT_DOWNLOADS;
use crate::matcher::{RadiusMode, DEFAULT_RELEVANT_RADIUS_COEFFICIENT};

/// Settings for [`crate::NexradSearch`].
///
/// ```yaml
/// verbose: true
/// max_concurrent_downloads: 8
/// radius_mode: fixed
/// relevant_radius_coefficient: 0.5
/// storage:
///   bucket: noaa-nexrad-level2
///   region: us-east-1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Log found stations and keys at info level
    pub verbose: bool,
    pub max_concurrent_downloads: usize,
    pub radius_mode: RadiusMode,
    /// Share of the station radius used for matching
    pub relevant_radius_coefficient: f64,
    pub storage: ObjectStorageConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            max_concurrent_downloads: DEFAULT_MAX_CONCURRENT_DOWNLOADS,
            radius_mode: RadiusMode::default(),
            relevant_radius_coefficient: DEFAULT_RELEVANT_RADIUS_COEFFICIENT,
            storage: ObjectStorageConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Load from a YAML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> NexradResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NexradError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            NexradError::ConfigError(msg) => {
                NexradError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        info!(path = %path.display(), "Loaded search configuration");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> NexradResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| NexradError::ConfigError(format!("Invalid YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NexradResult<()> {
        let c = self.relevant_radius_coefficient;
        if !c.is_finite() || c <= 0.0 {
            return Err(NexradError::ConfigError(format!(
                "relevant_radius_coefficient must be positive, got {}",
                c
            )));
        }

        if self.storage.bucket.is_empty() {
            return Err(NexradError::ConfigError("storage.bucket is empty".to_string()));
        }

        Ok(())
    }
}
