//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, RatesConfig, Settings, ValidationLimits};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// ├── settings.yaml   # Server, logging and validation settings
/// └── rates.yaml      # Default and preset hourly rates
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Default rate: {}", loader.default_hourly_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A configured hourly rate is zero
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), shift_payroll::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<Settings>(&path.join("settings.yaml"))?;

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<RatesConfig>(&rates_path)?;
        Self::validate_rates(&rates, &rates_path)?;

        Ok(Self {
            config: PayrollConfig::new(settings, rates),
        })
    }

    /// Builds a loader from already-parsed parts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] if a rate is zero.
    pub fn from_parts(settings: Settings, rates: RatesConfig) -> EngineResult<Self> {
        Self::validate_rates(&rates, Path::new("<inline>"))?;
        Ok(Self {
            config: PayrollConfig::new(settings, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_rates(rates: &RatesConfig, path: &Path) -> EngineResult<()> {
        let message = if rates.default_hourly_rate == 0 {
            "default_hourly_rate must be greater than zero"
        } else if rates.presets.contains(&0) {
            "presets must be greater than zero"
        } else {
            return Ok(());
        };

        Err(EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: message.to_string(),
        })
    }

    /// Returns the general settings.
    pub fn settings(&self) -> &Settings {
        self.config.settings()
    }

    /// Returns the validation limits.
    pub fn validation(&self) -> &ValidationLimits {
        &self.config.settings().validation
    }

    /// Returns the rate configuration.
    pub fn rates(&self) -> &RatesConfig {
        self.config.rates()
    }

    /// Returns the rate applied to shifts recorded without one.
    pub fn default_hourly_rate(&self) -> u32 {
        self.config.rates().default_hourly_rate
    }
}
