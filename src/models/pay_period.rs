//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: an inclusive date range used
//! to select the shifts and advances that belong to one settlement.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Employee;

/// An inclusive date range for a settlement.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// )
/// .unwrap();
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a period, rejecting a start date after the end date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `start_date > end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        let period = Self {
            start_date,
            end_date,
        };
        period.validate()?;
        Ok(period)
    }

    /// Checks the bounds of a period built from its public fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `start_date > end_date`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidPeriod {
                start: self.start_date,
                end: self.end_date,
                message: "start date is after end date".to_string(),
            });
        }
        Ok(())
    }

    /// A period covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// A period ending on `end_date` and starting `days` days earlier.
    ///
    /// Used by the shift listing filters (`trailing_days(today, 7)` for the
    /// past week). Salary periods follow calendar months instead, see
    /// [`PayPeriod::month_to_date`] and [`PayPeriod::previous_month`].
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    /// let week = PayPeriod::trailing_days(today, 7);
    /// assert_eq!(week.start_date, NaiveDate::from_ymd_opt(2026, 1, 24).unwrap());
    /// assert_eq!(week.end_date, today);
    /// ```
    pub fn trailing_days(end_date: NaiveDate, days: u32) -> Self {
        let start_date = end_date
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start_date,
            end_date,
        }
    }

    /// The first of `today`'s month through `today`.
    ///
    /// This is the default salary period.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
    /// let period = PayPeriod::month_to_date(today);
    /// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    /// assert_eq!(period.end_date, today);
    /// ```
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            start_date: first_of_month(today),
            end_date: today,
        }
    }

    /// The whole calendar month before `today`'s month.
    pub fn previous_month(today: NaiveDate) -> Self {
        let end_date = first_of_month(today).pred_opt().unwrap_or(NaiveDate::MIN);
        Self {
            start_date: first_of_month(end_date),
            end_date,
        }
    }

    /// Checks if a given date falls within this period, inclusive of both ends.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The suggested display name for a payout over this period:
    /// `"<full name> - <Month YYYY>"`, using the start date's month.
    pub fn default_name(&self, employee: &Employee) -> String {
        let month = self.start_date.format("%B %Y");
        let full_name = employee.full_name();
        if full_name.is_empty() {
            month.to_string()
        } else {
            format!("{} - {}", full_name, month)
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
