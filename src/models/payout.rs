//! Payout draft model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PeriodSummary;

/// A payout record ready to be submitted to the backend.
///
/// Built from a [`PeriodSummary`]; the backend owns the payout once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutDraft {
    /// The employee being paid.
    pub employee_id: u64,
    /// First day of the settled period.
    pub period_start: NaiveDate,
    /// Last day of the settled period.
    pub period_end: NaiveDate,
    /// Display name of the period.
    pub period_name: String,
    /// Shifts settled by this payout.
    pub shift_ids: Vec<u64>,
    /// Advances deducted by this payout.
    pub advance_ids: Vec<u64>,
    /// Worked hours in the period.
    pub total_hours: Decimal,
    /// Gross earnings.
    pub total_earnings: Decimal,
    /// Advances deducted.
    pub total_advances: Decimal,
    /// Amount payable.
    pub net_amount: Decimal,
    /// Optional free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Date the payout was made, if already paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<NaiveDate>,
}

impl PayoutDraft {
    /// Builds a payout draft from a period summary.
    ///
    /// The period name and notes are trimmed; notes that are empty after
    /// trimming are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPayout`] if the period name is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::models::{PayoutDraft, PeriodSummary};
    /// use chrono::NaiveDate;
    ///
    /// let summary = PeriodSummary::empty(
    ///     1,
    ///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    /// );
    /// let draft = PayoutDraft::from_summary(&summary, " January ", Some("  "), None).unwrap();
    /// assert_eq!(draft.period_name, "January");
    /// assert_eq!(draft.notes, None);
    /// ```
    pub fn from_summary(
        summary: &PeriodSummary,
        period_name: &str,
        notes: Option<&str>,
        paid_at: Option<NaiveDate>,
    ) -> EngineResult<Self> {
        let period_name = period_name.trim();
        if period_name.is_empty() {
            return Err(EngineError::InvalidPayout {
                message: "period name is required".to_string(),
            });
        }

        let notes = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Self {
            employee_id: summary.employee_id,
            period_start: summary.period_start,
            period_end: summary.period_end,
            period_name: period_name.to_string(),
            shift_ids: summary.shift_ids.clone(),
            advance_ids: summary.advance_ids.clone(),
            total_hours: summary.total_hours,
            total_earnings: summary.total_earnings,
            total_advances: summary.total_advances,
            net_amount: summary.net_amount,
            notes,
            paid_at,
        })
    }
}
