//! Application state for the shift payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RatesConfig, ValidationLimits};

/// Shared application state.
///
/// Holds the loaded payroll configuration. The engine itself keeps no
/// records between requests.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configured hourly rates.
    pub fn rates(&self) -> &RatesConfig {
        self.config.rates()
    }

    /// Returns the limits used when validating records.
    pub fn validation(&self) -> &ValidationLimits {
        self.config.validation()
    }
}
