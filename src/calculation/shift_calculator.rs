//! Shift calculation functionality.
//!
//! Converts a shift's raw time fields into worked hours and earnings. Times
//! are time-of-day values on a single day: a shift whose end is not after
//! its start (including one that crosses midnight) is worth nothing.

use chrono::NaiveTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::Shift;

const SECONDS_PER_HOUR: i64 = 3600;

/// Worked hours and earnings for one shift, both at 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCalculation {
    /// Worked hours after the break is subtracted.
    pub work_hours: Decimal,
    /// `work_hours * hourly_rate`.
    pub total_earned: Decimal,
}

impl ShiftCalculation {
    /// A shift worth nothing.
    pub const ZERO: Self = Self {
        work_hours: Decimal::ZERO,
        total_earned: Decimal::ZERO,
    };
}

/// Rounds to 2 decimal places, ties to even, and fixes the scale at 2.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::round_to_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_cents(Decimal::new(125, 3)).to_string(), "0.12");
/// assert_eq!(round_to_cents(Decimal::new(135, 3)).to_string(), "0.14");
/// assert_eq!(round_to_cents(Decimal::new(8, 0)).to_string(), "8.00");
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded
}

/// Calculates worked hours and earnings for a shift.
///
/// 1. The raw span is `end_time - start_time`; if it is not positive the
///    result is [`ShiftCalculation::ZERO`].
/// 2. The break is subtracted and the result floored at zero.
/// 3. Hours are rounded to 2 decimal places before being multiplied by the
///    rate, and the product is rounded again.
///
/// Rounding is half-to-even at both steps.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::calculate_shift;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let result = calculate_shift(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     60,
///     500,
/// );
/// assert_eq!(result.work_hours, Decimal::new(800, 2));
/// assert_eq!(result.total_earned, Decimal::new(400000, 2));
/// ```
pub fn calculate_shift(
    start_time: NaiveTime,
    end_time: NaiveTime,
    break_minutes: u32,
    hourly_rate: u32,
) -> ShiftCalculation {
    let raw_seconds = (end_time - start_time).num_seconds();
    if raw_seconds <= 0 {
        return ShiftCalculation::ZERO;
    }

    let break_seconds = i64::from(break_minutes) * 60;
    let worked_seconds = (raw_seconds - break_seconds).max(0);

    let work_hours =
        round_to_cents(Decimal::from(worked_seconds) / Decimal::from(SECONDS_PER_HOUR));
    let total_earned = round_to_cents(work_hours * Decimal::from(hourly_rate));

    ShiftCalculation {
        work_hours,
        total_earned,
    }
}

/// Calculates a stored shift from its raw fields.
///
/// Returns `None` if the start time, end time or hourly rate is missing.
/// A missing break counts as no break.
pub fn calculate_recorded_shift(shift: &Shift) -> Option<ShiftCalculation> {
    let start = shift.start_time?;
    let end = shift.end_time?;
    let rate = shift.hourly_rate?;
    Some(calculate_shift(
        start,
        end,
        shift.break_minutes.unwrap_or(0),
        rate,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    fn make_shift(start: Option<&str>, end: Option<&str>, rate: Option<u32>) -> Shift {
        Shift {
            id: 1,
            employee_id: Some(1),
            workplace_id: Some(1),
            date: NaiveDate::from_ymd_opt(2026, 1, 15),
            start_time: start.map(t),
            end_time: end.map(t),
            break_minutes: None,
            hourly_rate: rate,
            work_hours: None,
            total_earned: None,
            notes: None,
            is_deleted: false,
        }
    }

    #[test]
    fn test_nine_to_six_with_hour_break() {
        let result = calculate_shift(t("09:00:00"), t("18:00:00"), 60, 500);
        assert_eq!(result.work_hours, dec("8.00"));
        assert_eq!(result.total_earned, dec("4000.00"));
    }

    #[test]
    fn test_break_longer_than_shift_floors_to_zero() {
        let result = calculate_shift(t("09:00:00"), t("09:30:00"), 60, 500);
        assert_eq!(result, ShiftCalculation::ZERO);
    }

    #[test]
    fn test_break_equal_to_shift_is_zero() {
        let result = calculate_shift(t("09:00:00"), t("10:00:00"), 60, 500);
        assert_eq!(result.work_hours, dec("0"));
        assert_eq!(result.total_earned, dec("0"));
    }

    #[test]
    fn test_end_before_start_is_zero() {
        let result = calculate_shift(t("18:00:00"), t("09:00:00"), 0, 500);
        assert_eq!(result, ShiftCalculation::ZERO);
    }

    #[test]
    fn test_zero_length_shift_is_zero() {
        let result = calculate_shift(t("09:00:00"), t("09:00:00"), 0, 500);
        assert_eq!(result, ShiftCalculation::ZERO);
    }

    #[test]
    fn test_overnight_shift_is_not_supported() {
        // 23:00 -> 02:00 is treated as an invalid span, not as 3 hours.
        let result = calculate_shift(t("23:00:00"), t("02:00:00"), 0, 500);
        assert_eq!(result, ShiftCalculation::ZERO);
    }

    #[test]
    fn test_half_hour_shift() {
        let result = calculate_shift(t("09:00:00"), t("13:30:00"), 0, 400);
        assert_eq!(result.work_hours, dec("4.50"));
        assert_eq!(result.total_earned, dec("1800.00"));
    }

    #[test]
    fn test_hours_rounded_before_multiplying() {
        // 20 minutes = 0.3333.. h -> 0.33 h; 0.33 * 500 = 165.00, not 166.67
        let result = calculate_shift(t("09:00:00"), t("09:20:00"), 0, 500);
        assert_eq!(result.work_hours, dec("0.33"));
        assert_eq!(result.total_earned, dec("165.00"));
    }

    #[test]
    fn test_hours_round_half_to_even() {
        // 90 s = 0.025 h -> 0.02 (half-away-from-zero would give 0.03)
        let result = calculate_shift(t("09:00:00"), t("09:01:30"), 0, 100);
        assert_eq!(result.work_hours, dec("0.02"));
        assert_eq!(result.total_earned, dec("2.00"));

        // 54 s = 0.015 h -> 0.02
        let result = calculate_shift(t("09:00:00"), t("09:00:54"), 0, 100);
        assert_eq!(result.work_hours, dec("0.02"));

        // 18 s = 0.005 h -> 0.00
        let result = calculate_shift(t("09:00:00"), t("09:00:18"), 0, 100);
        assert_eq!(result.work_hours, dec("0.00"));
    }

    #[test]
    fn test_results_have_two_decimal_places() {
        let result = calculate_shift(t("09:00:00"), t("17:00:00"), 0, 200);
        assert_eq!(result.work_hours.to_string(), "8.00");
        assert_eq!(result.total_earned.to_string(), "1600.00");
    }

    #[test]
    fn test_huge_break_does_not_overflow() {
        let result = calculate_shift(t("00:00:00"), t("23:59:59"), u32::MAX, 500);
        assert_eq!(result, ShiftCalculation::ZERO);
    }

    #[test]
    fn test_round_to_cents_ties_to_even() {
        assert_eq!(round_to_cents(dec("2.345")), dec("2.34"));
        assert_eq!(round_to_cents(dec("2.355")), dec("2.36"));
        assert_eq!(round_to_cents(dec("-2.345")), dec("-2.34"));
    }

    #[test]
    fn test_recorded_shift_uses_raw_fields() {
        let mut shift = make_shift(Some("09:00:00"), Some("18:00:00"), Some(500));
        shift.break_minutes = Some(60);
        let result = calculate_recorded_shift(&shift).unwrap();
        assert_eq!(result.work_hours, dec("8.00"));
        assert_eq!(result.total_earned, dec("4000.00"));
    }

    #[test]
    fn test_recorded_shift_missing_break_counts_as_zero() {
        let shift = make_shift(Some("09:00:00"), Some("18:00:00"), Some(500));
        let result = calculate_recorded_shift(&shift).unwrap();
        assert_eq!(result.work_hours, dec("9.00"));
    }

    #[test]
    fn test_recorded_shift_missing_fields_is_none() {
        assert!(calculate_recorded_shift(&make_shift(None, Some("18:00:00"), Some(500))).is_none());
        assert!(calculate_recorded_shift(&make_shift(Some("09:00:00"), None, Some(500))).is_none());
        assert!(
            calculate_recorded_shift(&make_shift(Some("09:00:00"), Some("18:00:00"), None))
                .is_none()
        );
    }

    #[test]
    fn test_calculation_serialization() {
        let result = calculate_shift(t("09:00:00"), t("18:00:00"), 60, 500);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"work_hours":"8.00","total_earned":"4000.00"}"#);
    }
}
