//! Error types for the shift payroll engine.
//!
//! The calculation core never fails; these errors come from configuration
//! loading, record validation, and payout preparation.

use thiserror::Error;

/// The main error type for the shift payroll engine.
///
/// # Example
///
/// ```
/// use shift_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds unusable values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift failed validation.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The id of the invalid shift (0 for a shift not yet created).
        shift_id: u64,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// An advance failed validation.
    #[error("Invalid advance '{advance_id}': {message}")]
    InvalidAdvance {
        /// The id of the invalid advance (0 for an advance not yet created).
        advance_id: u64,
        /// A description of what made the advance invalid.
        message: String,
    },

    /// A period had inverted bounds.
    #[error("Invalid period {start}..={end}: {message}")]
    InvalidPeriod {
        /// The requested start date.
        start: chrono::NaiveDate,
        /// The requested end date.
        end: chrono::NaiveDate,
        /// A description of the problem.
        message: String,
    },

    /// A payout draft could not be built.
    #[error("Invalid payout: {message}")]
    InvalidPayout {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/rates.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/rates.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_shift_displays_id_and_message() {
        let error = EngineError::InvalidShift {
            shift_id: 42,
            message: "end time must be after start time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift '42': end time must be after start time"
        );
    }

    #[test]
    fn test_invalid_advance_displays_id_and_message() {
        let error = EngineError::InvalidAdvance {
            advance_id: 7,
            message: "amount must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid advance '7': amount must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_period_displays_bounds() {
        let error = EngineError::InvalidPeriod {
            start: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            message: "start date is after end date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid period 2026-02-01..=2026-01-01: start date is after end date"
        );
    }

    #[test]
    fn test_invalid_payout_displays_message() {
        let error = EngineError::InvalidPayout {
            message: "period name is required".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid payout: period name is required");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_payout() -> EngineResult<()> {
            Err(EngineError::InvalidPayout {
                message: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_payout()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
