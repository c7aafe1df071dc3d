//! Advance model and edit diffing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A cash advance paid to an employee ahead of settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    /// Backend identifier, 0 for an advance that has not been created yet.
    #[serde(default)]
    pub id: u64,
    /// The employee who received the advance.
    pub employee_id: Option<u64>,
    /// The date the advance was paid.
    pub date: Option<NaiveDate>,
    /// The amount paid. Must be positive when the advance is created.
    pub amount: Option<Decimal>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Advance {
    /// Returns true if the advance has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Validates the advance before it is sent to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAdvance`] if the employee or date is
    /// missing, or the amount is missing or not strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::models::Advance;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let advance = Advance {
    ///     id: 0,
    ///     employee_id: Some(1),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 20),
    ///     amount: Some(Decimal::ZERO),
    ///     is_deleted: false,
    /// };
    /// assert!(advance.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id.unwrap_or(0) == 0 {
            return Err(self.invalid("employee is required"));
        }
        if self.date.is_none() {
            return Err(self.invalid("date is required"));
        }
        match self.amount {
            Some(amount) if amount > Decimal::ZERO => Ok(()),
            _ => Err(self.invalid("amount must be greater than zero")),
        }
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidAdvance {
            advance_id: self.id,
            message: message.to_string(),
        }
    }
}

/// The changed fields of an inline advance edit.
///
/// Produced by diffing the record as loaded against the record as edited,
/// so the domain type itself carries no "original value" snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceEdit {
    /// The advance being edited.
    pub id: u64,
    /// The new date, if it changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// The new amount, if it changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl AdvanceEdit {
    /// Diffs two versions of the same advance.
    ///
    /// Returns `None` when neither date nor amount changed. Amounts are
    /// compared by value, so `3000` and `3000.00` are the same amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::models::{Advance, AdvanceEdit};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let original = Advance {
    ///     id: 4,
    ///     employee_id: Some(1),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 20),
    ///     amount: Some(Decimal::new(3000, 0)),
    ///     is_deleted: false,
    /// };
    /// let mut edited = original.clone();
    /// edited.amount = Some(Decimal::new(3500, 0));
    ///
    /// let edit = AdvanceEdit::between(&original, &edited).unwrap();
    /// assert_eq!(edit.amount, Some(Decimal::new(3500, 0)));
    /// assert_eq!(edit.date, None);
    /// ```
    pub fn between(original: &Advance, current: &Advance) -> Option<Self> {
        let date = (current.date != original.date)
            .then_some(current.date)
            .flatten();
        let amount = (current.amount != original.amount)
            .then_some(current.amount)
            .flatten();

        if date.is_none() && amount.is_none() {
            return None;
        }

        Some(Self {
            id: current.id,
            date,
            amount,
        })
    }
}
