//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading an
//! [`AnalysisConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AnalysisConfig;

/// Loads and validates analysis configuration.
///
/// # File Format
///
/// ```text
/// # analysis.yaml (every key optional)
/// fulltime_standard_hours: 200
/// parttime_standard_hours: 100
/// hours_per_leave_day: 8
/// productivity_threshold_pct: 90
/// max_rows: 100000
/// ```
///
/// # Example
///
/// ```no_run
/// use productivity_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/analysis.yaml")?;
/// println!("Threshold: {}%", loader.config().productivity_threshold_pct);
/// # Ok::<(), productivity_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AnalysisConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        let config = if content.trim().is_empty() {
            AnalysisConfig::default()
        } else {
            serde_yaml::from_str::<AnalysisConfig>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AnalysisConfig {
        self.config
    }
}
