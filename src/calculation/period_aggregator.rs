//! Period aggregation functionality.
//!
//! Combines one employee's shifts and advances over an inclusive date range
//! into a [`PeriodSummary`]. Malformed records never abort the aggregation:
//! they are counted, contribute zero, and are reported as warnings.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{
    Advance, AggregationWarning, PayPeriod, PeriodSummary, RecordKind, Shift, WarningCode,
};

use super::shift_calculator::{ShiftCalculation, calculate_recorded_shift, round_to_cents};

/// Resolves the figures a shift contributes to a summary.
///
/// Preference order:
/// 1. both cached values;
/// 2. a fresh calculation from start, end and rate;
/// 3. cached hours multiplied by the rate.
///
/// Returns `None` when none of these are available, or when cached hours
/// multiplied by the rate is too large to represent.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::shift_figures;
/// use shift_payroll::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = Shift {
///     id: 1,
///     employee_id: Some(1),
///     workplace_id: Some(1),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15),
///     start_time: None,
///     end_time: None,
///     break_minutes: None,
///     hourly_rate: Some(400),
///     work_hours: Some(Decimal::new(450, 2)),
///     total_earned: None,
///     notes: None,
///     is_deleted: false,
/// };
/// let figures = shift_figures(&shift).unwrap();
/// assert_eq!(figures.total_earned, Decimal::new(180000, 2));
/// ```
pub fn shift_figures(shift: &Shift) -> Option<ShiftCalculation> {
    if let (Some(work_hours), Some(total_earned)) = (shift.work_hours, shift.total_earned) {
        return Some(ShiftCalculation {
            work_hours,
            total_earned,
        });
    }

    if let Some(calculation) = calculate_recorded_shift(shift) {
        return Some(calculation);
    }

    let (work_hours, rate) = (shift.work_hours?, shift.hourly_rate?);
    let total_earned = work_hours.checked_mul(Decimal::from(rate))?;
    Some(ShiftCalculation {
        work_hours,
        total_earned: round_to_cents(total_earned),
    })
}

/// Aggregates an employee's shifts and advances over a period.
///
/// A record is included when it is not soft-deleted, has a date inside the
/// period (both bounds inclusive), belongs to `employee_id` (records with no
/// employee are assumed to), and its non-zero id has not been seen before.
/// Unsaved records (id 0) are never treated as duplicates.
///
/// Included shifts contribute [`shift_figures`]; included advances their
/// amount. Records lacking the needed fields are still counted and listed,
/// contribute zero, and produce a [`WarningCode::MissingFields`] warning.
/// Records whose figures would push a total past the representable range
/// are counted, contribute zero, and produce [`WarningCode::AmountOverflow`].
///
/// Hour and money totals are rounded half-to-even to two decimal places.
///
/// The result depends only on the inputs: calling this twice with the same
/// records yields equal summaries.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::aggregate;
/// use shift_payroll::models::{Advance, PayPeriod, Shift};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// )
/// .unwrap();
///
/// let shift = Shift {
///     id: 1,
///     employee_id: Some(7),
///     workplace_id: Some(1),
///     date: NaiveDate::from_ymd_opt(2026, 1, 10),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0),
///     end_time: NaiveTime::from_hms_opt(18, 0, 0),
///     break_minutes: Some(60),
///     hourly_rate: Some(500),
///     work_hours: None,
///     total_earned: None,
///     notes: None,
///     is_deleted: false,
/// };
/// let advance = Advance {
///     id: 2,
///     employee_id: Some(7),
///     date: NaiveDate::from_ymd_opt(2026, 1, 12),
///     amount: Some(Decimal::new(1000, 0)),
///     is_deleted: false,
/// };
///
/// let summary = aggregate(7, &[shift], &[advance], &period);
/// assert_eq!(summary.total_earnings, Decimal::new(4000, 0));
/// assert_eq!(summary.net_amount, Decimal::new(3000, 0));
/// ```
pub fn aggregate(
    employee_id: u64,
    shifts: &[Shift],
    advances: &[Advance],
    period: &PayPeriod,
) -> PeriodSummary {
    let mut summary = PeriodSummary::empty(employee_id, period.start_date, period.end_date);

    let mut seen_shift_ids = HashSet::new();
    for shift in shifts {
        if !in_period(shift.date, shift.is_active(), period) {
            continue;
        }
        if let Some(warning) = ownership_warning(
            RecordKind::Shift,
            shift.id,
            shift.employee_id,
            employee_id,
        ) {
            summary.warnings.push(warning);
            continue;
        }
        if let Some(warning) = duplicate_warning(RecordKind::Shift, shift.id, &mut seen_shift_ids) {
            summary.warnings.push(warning);
            continue;
        }

        summary.shift_count += 1;
        if shift.id != 0 {
            summary.shift_ids.push(shift.id);
        }

        match shift_figures(shift) {
            Some(figures) => {
                let totals = summary
                    .total_hours
                    .checked_add(figures.work_hours)
                    .zip(summary.total_earnings.checked_add(figures.total_earned));
                match totals {
                    Some((hours, earnings)) => {
                        summary.total_hours = hours;
                        summary.total_earnings = earnings;
                    }
                    None => summary
                        .warnings
                        .push(overflow_warning(RecordKind::Shift, shift.id)),
                }
            }
            None if shift.work_hours.is_some() && shift.hourly_rate.is_some() => {
                summary
                    .warnings
                    .push(overflow_warning(RecordKind::Shift, shift.id));
            }
            None => {
                warn!(shift_id = shift.id, "Shift has no usable time or rate fields");
                summary.warnings.push(AggregationWarning {
                    code: WarningCode::MissingFields,
                    record_kind: RecordKind::Shift,
                    record_id: shift.id,
                    message: "shift has neither cached figures nor start, end and rate"
                        .to_string(),
                });
            }
        }
    }

    let mut seen_advance_ids = HashSet::new();
    for advance in advances {
        if !in_period(advance.date, advance.is_active(), period) {
            continue;
        }
        if let Some(warning) = ownership_warning(
            RecordKind::Advance,
            advance.id,
            advance.employee_id,
            employee_id,
        ) {
            summary.warnings.push(warning);
            continue;
        }
        if let Some(warning) =
            duplicate_warning(RecordKind::Advance, advance.id, &mut seen_advance_ids)
        {
            summary.warnings.push(warning);
            continue;
        }

        summary.advance_count += 1;
        if advance.id != 0 {
            summary.advance_ids.push(advance.id);
        }

        match advance.amount {
            Some(amount) => {
                let total = summary
                    .total_advances
                    .checked_add(amount)
                    .filter(|&total| summary.total_earnings.checked_sub(total).is_some());
                match total {
                    Some(total) => summary.total_advances = total,
                    None => summary
                        .warnings
                        .push(overflow_warning(RecordKind::Advance, advance.id)),
                }
            }
            None => {
                warn!(advance_id = advance.id, "Advance has no amount");
                summary.warnings.push(AggregationWarning {
                    code: WarningCode::MissingFields,
                    record_kind: RecordKind::Advance,
                    record_id: advance.id,
                    message: "advance has no amount".to_string(),
                });
            }
        }
    }

    summary.total_hours = round_to_cents(summary.total_hours);
    summary.total_earnings = round_to_cents(summary.total_earnings);
    summary.total_advances = round_to_cents(summary.total_advances);
    summary.net_amount = round_to_cents(
        summary
            .total_earnings
            .saturating_sub(summary.total_advances),
    );

    debug!(
        employee_id,
        shift_count = summary.shift_count,
        advance_count = summary.advance_count,
        total_earnings = %summary.total_earnings,
        total_advances = %summary.total_advances,
        warnings = summary.warnings.len(),
        "Aggregated period"
    );

    summary
}

fn in_period(date: Option<chrono::NaiveDate>, is_active: bool, period: &PayPeriod) -> bool {
    is_active && date.is_some_and(|d| period.contains_date(d))
}

fn ownership_warning(
    kind: RecordKind,
    record_id: u64,
    owner: Option<u64>,
    employee_id: u64,
) -> Option<AggregationWarning> {
    let owner = owner.filter(|&id| id != 0)?;
    if owner == employee_id {
        return None;
    }
    debug!(record_id, owner, employee_id, ?kind, "Excluding record of another employee");
    Some(AggregationWarning {
        code: WarningCode::EmployeeMismatch,
        record_kind: kind,
        record_id,
        message: format!("belongs to employee {}", owner),
    })
}

fn overflow_warning(kind: RecordKind, record_id: u64) -> AggregationWarning {
    warn!(record_id, ?kind, "Record amount exceeds the representable total");
    AggregationWarning {
        code: WarningCode::AmountOverflow,
        record_kind: kind,
        record_id,
        message: "amount too large to add to the period totals".to_string(),
    }
}

fn duplicate_warning(
    kind: RecordKind,
    record_id: u64,
    seen: &mut HashSet<u64>,
) -> Option<AggregationWarning> {
    if record_id == 0 || seen.insert(record_id) {
        return None;
    }
    debug!(record_id, ?kind, "Excluding duplicate record");
    Some(AggregationWarning {
        code: WarningCode::DuplicateRecord,
        record_kind: kind,
        record_id,
        message: "record already included".to_string(),
    })
}
