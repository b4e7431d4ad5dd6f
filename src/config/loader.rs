//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, PayrollSettings, ServerConfig, TaxPolicy};

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind_address: "127.0.0.1:3000"
/// tax:
///   threshold: 5000
///   lower_rate: 0.10
///   upper_rate: 0.15
/// payroll:
///   default_working_days: 22
/// ```
///
/// Every section may be omitted; omitted values take the built-in defaults.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Listening on {}", loader.server().bind_address);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read and
    /// [`EngineError::ConfigParseError`] if it is not valid YAML for
    /// [`EngineConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded configuration");
        Ok(Self { config })
    }

    /// Builds a loader from YAML text already in memory.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config = Self::parse(content, "<inline>")?;
        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> EngineResult<EngineConfig> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(EngineConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the tax rule used by the calculator.
    pub fn tax_policy(&self) -> &TaxPolicy {
        &self.config.tax
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the payroll run settings.
    pub fn payroll(&self) -> &PayrollSettings {
        &self.config.payroll
    }
}
