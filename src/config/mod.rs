//! Configuration loading and management for the shift payroll engine.
//!
//! This module loads server, logging and validation settings together with
//! the configured hourly rates from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Listening on {}", config.settings().server.bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    LoggingSettings, PayrollConfig, RatesConfig, ServerSettings, Settings, ValidationLimits,
};
