//! Request types for the shift payroll API.
//!
//! This module defines the JSON request structures for the API endpoints.
//! Shifts and advances are accepted in their model form.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calculation::ShiftQuery;
use crate::models::{Advance, Employee, PayPeriod, Shift};

/// Request body for the `/shifts/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateShiftRequest {
    /// Start time of day.
    pub start_time: NaiveTime,
    /// End time of day.
    pub end_time: NaiveTime,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Hourly rate in whole currency units.
    pub hourly_rate: u32,
}

/// Request body for the `/shifts/recalculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecalculateRequest {
    /// Shifts whose cached figures should be refreshed.
    pub shifts: Vec<Shift>,
}

/// Request body for the `/shifts/query` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftQueryRequest {
    /// Filter criteria.
    #[serde(default)]
    pub query: ShiftQuery,
    /// Shifts to filter.
    pub shifts: Vec<Shift>,
}

/// Request body for the `/periods/summary` endpoint.
///
/// Callers may send every record they hold; the aggregator selects the ones
/// belonging to the employee and period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummaryRequest {
    /// The employee to summarise.
    pub employee_id: u64,
    /// The inclusive period.
    pub period: PayPeriod,
    /// Candidate shifts.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// Candidate advances.
    #[serde(default)]
    pub advances: Vec<Advance>,
}

/// Request body for the `/payouts/draft` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutDraftRequest {
    /// The records to settle.
    #[serde(flatten)]
    pub summary: PeriodSummaryRequest,
    /// The employee, used to name the period when no name is given.
    #[serde(default)]
    pub employee: Option<Employee>,
    /// Display name of the period.
    #[serde(default)]
    pub period_name: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Date the payout was made.
    #[serde(default)]
    pub paid_at: Option<NaiveDate>,
}
