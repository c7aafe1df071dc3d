//! Bulk refresh of cached shift figures.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Shift;

use super::shift_calculator::calculate_shift;

/// The outcome of [`recalculate_shifts`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecalculationResult {
    /// Shifts whose cached figures were refreshed, in input order.
    pub shifts: Vec<Shift>,
    /// Ids of shifts that were left alone.
    pub skipped_ids: Vec<u64>,
}

/// Refreshes `work_hours` and `total_earned` on every shift that records a
/// start time, end time, hourly rate and break duration.
///
/// Soft-deleted shifts and shifts missing any of those fields are skipped
/// and reported by id. The input is not modified.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::recalculate_shifts;
/// use shift_payroll::models::Shift;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let stale = Shift {
///     id: 4,
///     employee_id: Some(1),
///     workplace_id: Some(1),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0),
///     break_minutes: Some(0),
///     hourly_rate: Some(300),
///     work_hours: Some(Decimal::new(7, 0)),
///     total_earned: Some(Decimal::new(2100, 0)),
///     notes: None,
///     is_deleted: false,
/// };
///
/// let result = recalculate_shifts(&[stale]);
/// assert_eq!(result.shifts[0].total_earned, Some(Decimal::new(240000, 2)));
/// assert!(result.skipped_ids.is_empty());
/// ```
pub fn recalculate_shifts(shifts: &[Shift]) -> RecalculationResult {
    let mut result = RecalculationResult::default();

    for shift in shifts {
        let fields = (
            shift.start_time,
            shift.end_time,
            shift.hourly_rate,
            shift.break_minutes,
        );
        match fields {
            (Some(start), Some(end), Some(rate), Some(break_minutes)) if shift.is_active() => {
                let calculation = calculate_shift(start, end, break_minutes, rate);
                let mut updated = shift.clone();
                updated.work_hours = Some(calculation.work_hours);
                updated.total_earned = Some(calculation.total_earned);
                result.shifts.push(updated);
            }
            _ => {
                debug!(shift_id = shift.id, "Skipping shift recalculation");
                result.skipped_ids.push(shift.id);
            }
        }
    }

    result
}
