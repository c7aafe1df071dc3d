//! Configuration types for the shift payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Socket address the server binds to (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

/// Log output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

/// Limits applied when validating records before they are sent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ValidationLimits {
    /// Maximum length of shift notes, in characters.
    #[serde(default = "default_notes_max_length")]
    pub notes_max_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            notes_max_length: default_notes_max_length(),
        }
    }
}

fn default_notes_max_length() -> usize {
    500
}

/// Contents of `settings.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Validation limits.
    #[serde(default)]
    pub validation: ValidationLimits,
}

/// Contents of `rates.yaml`: the hourly rates offered when recording shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Rate applied to a new shift when none is given.
    pub default_hourly_rate: u32,
    /// Rates offered for selection.
    #[serde(default)]
    pub presets: Vec<u32>,
}

/// Complete payroll configuration.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files into a single structure.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    settings: Settings,
    rates: RatesConfig,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(settings: Settings, rates: RatesConfig) -> Self {
        Self { settings, rates }
    }

    /// Returns the general settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the rate configuration.
    pub fn rates(&self) -> &RatesConfig {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_when_sections_missing() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings.server.bind_address, "0.0.0.0:3000");
        assert!(!settings.logging.json);
        assert_eq!(settings.validation.notes_max_length, 500);
    }

    #[test]
    fn test_settings_overrides() {
        let yaml = r#"
server:
  bind_address: "127.0.0.1:8080"
logging:
  json: true
validation:
  notes_max_length: 120
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.server.bind_address, "127.0.0.1:8080");
        assert!(settings.logging.json);
        assert_eq!(settings.validation.notes_max_length, 120);
    }

    #[test]
    fn test_rates_presets_default_to_empty() {
        let rates: RatesConfig = serde_yaml::from_str("default_hourly_rate: 250").unwrap();
        assert_eq!(rates.default_hourly_rate, 250);
        assert!(rates.presets.is_empty());
    }

    #[test]
    fn test_rates_require_default_rate() {
        let result: Result<RatesConfig, _> = serde_yaml::from_str("presets: [200]");
        assert!(result.is_err());
    }
}
