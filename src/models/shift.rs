//! Shift model.
//!
//! A shift is one worked period for one employee at one workplace. Records
//! arrive from the backend with most fields nullable, so every field the
//! backend may omit is an `Option` here.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ValidationLimits;
use crate::error::{EngineError, EngineResult};

/// Represents a shift record as exchanged with the backend.
///
/// `work_hours` and `total_earned` are a cache of the values produced by
/// [`calculate_shift`](crate::calculation::calculate_shift); they may be absent
/// or stale on records loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Backend identifier, 0 for a shift that has not been created yet.
    #[serde(default)]
    pub id: u64,
    /// The employee who worked the shift.
    pub employee_id: Option<u64>,
    /// The workplace the shift was worked at.
    pub workplace_id: Option<u64>,
    /// The calendar date of the shift.
    pub date: Option<NaiveDate>,
    /// Start time of day.
    pub start_time: Option<NaiveTime>,
    /// End time of day. Must be later than `start_time` on the same day.
    pub end_time: Option<NaiveTime>,
    /// Unpaid break in minutes. Absent means no break.
    pub break_minutes: Option<u32>,
    /// Hourly rate in whole currency units.
    pub hourly_rate: Option<u32>,
    /// Cached worked hours (2 decimal places).
    pub work_hours: Option<Decimal>,
    /// Cached earnings (2 decimal places).
    pub total_earned: Option<Decimal>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Shift {
    /// Returns true if the shift has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Validates the shift before it is sent to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] naming the first rule that failed:
    /// missing employee, workplace, date or times; end not after start;
    /// a zero or missing hourly rate; a break at least as long as the shift;
    /// or notes longer than `limits.notes_max_length` characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::config::ValidationLimits;
    /// use shift_payroll::models::Shift;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let shift = Shift {
    ///     id: 0,
    ///     employee_id: Some(1),
    ///     workplace_id: Some(2),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15),
    ///     start_time: NaiveTime::from_hms_opt(9, 0, 0),
    ///     end_time: NaiveTime::from_hms_opt(18, 0, 0),
    ///     break_minutes: Some(60),
    ///     hourly_rate: Some(500),
    ///     work_hours: None,
    ///     total_earned: None,
    ///     notes: None,
    ///     is_deleted: false,
    /// };
    /// assert!(shift.validate(&ValidationLimits::default()).is_ok());
    /// ```
    pub fn validate(&self, limits: &ValidationLimits) -> EngineResult<()> {
        if self.employee_id.unwrap_or(0) == 0 {
            return Err(self.invalid("employee is required"));
        }
        if self.workplace_id.unwrap_or(0) == 0 {
            return Err(self.invalid("workplace is required"));
        }
        if self.date.is_none() {
            return Err(self.invalid("date is required"));
        }
        let start = self
            .start_time
            .ok_or_else(|| self.invalid("start time is required"))?;
        let end = self
            .end_time
            .ok_or_else(|| self.invalid("end time is required"))?;
        if end <= start {
            return Err(self.invalid("end time must be after start time"));
        }
        if self.hourly_rate.unwrap_or(0) == 0 {
            return Err(self.invalid("hourly rate must be greater than zero"));
        }

        let span_seconds = (end - start).num_seconds();
        if i64::from(self.break_minutes.unwrap_or(0)) * 60 >= span_seconds {
            return Err(self.invalid("break must be shorter than the shift"));
        }

        if let Some(notes) = &self.notes {
            if notes.chars().count() > limits.notes_max_length {
                return Err(self.invalid(format!(
                    "notes exceed {} characters",
                    limits.notes_max_length
                )));
            }
        }

        Ok(())
    }

    fn invalid(&self, message: impl Into<String>) -> EngineError {
        EngineError::InvalidShift {
            shift_id: self.id,
            message: message.into(),
        }
    }
}
