//! Period summary models.
//!
//! This module contains the [`PeriodSummary`] produced by the period
//! aggregator, and the [`AggregationWarning`]s it carries for records that
//! were skipped or contributed nothing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies why a record was flagged during aggregation.
///
/// # Example
///
/// ```
/// use shift_payroll::models::WarningCode;
///
/// let json = serde_json::to_string(&WarningCode::MissingFields).unwrap();
/// assert_eq!(json, "\"MISSING_FIELDS\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// The record lacked the fields needed to compute its figures; it was
    /// counted but contributed zero.
    MissingFields,
    /// The record belongs to another employee and was excluded.
    EmployeeMismatch,
    /// The record repeated an id already aggregated and was excluded.
    DuplicateRecord,
    /// The record's amount could not be added without exceeding the
    /// representable range; it was counted but contributed zero.
    AmountOverflow,
}

/// The kind of record a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A shift record.
    Shift,
    /// An advance record.
    Advance,
}

/// A warning raised while aggregating a period.
///
/// Warnings never abort the aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationWarning {
    /// What went wrong.
    pub code: WarningCode,
    /// Which kind of record it concerns.
    pub record_kind: RecordKind,
    /// The id of the record (0 if not yet created).
    pub record_id: u64,
    /// A human-readable description.
    pub message: String,
}

/// Totals for one employee over one inclusive period.
///
/// Recomputed on every request; never persisted. `net_amount` may be
/// negative when advances exceed earnings.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PeriodSummary;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let summary = PeriodSummary::empty(
///     1,
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// );
/// assert_eq!(summary.net_amount, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The employee the summary is for.
    pub employee_id: u64,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Number of shifts included.
    pub shift_count: usize,
    /// Sum of worked hours.
    pub total_hours: Decimal,
    /// Sum of shift earnings.
    pub total_earnings: Decimal,
    /// Number of advances included.
    pub advance_count: usize,
    /// Sum of advance amounts.
    pub total_advances: Decimal,
    /// `total_earnings - total_advances`.
    pub net_amount: Decimal,
    /// Backend ids of the included shifts, in input order. Unsaved shifts
    /// (id 0) are counted but not listed.
    pub shift_ids: Vec<u64>,
    /// Backend ids of the included advances, in input order.
    pub advance_ids: Vec<u64>,
    /// Records that were excluded or contributed nothing.
    #[serde(default)]
    pub warnings: Vec<AggregationWarning>,
}

impl PeriodSummary {
    /// A summary with no records.
    pub fn empty(employee_id: u64, period_start: NaiveDate, period_end: NaiveDate) -> Self {
        Self {
            employee_id,
            period_start,
            period_end,
            shift_count: 0,
            total_hours: Decimal::ZERO,
            total_earnings: Decimal::ZERO,
            advance_count: 0,
            total_advances: Decimal::ZERO,
            net_amount: Decimal::ZERO,
            shift_ids: Vec::new(),
            advance_ids: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
