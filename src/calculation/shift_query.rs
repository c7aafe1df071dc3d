//! Shift filtering and running statistics for shift listings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Shift;

use super::shift_calculator::{calculate_recorded_shift, round_to_cents};

/// Filter criteria for a shift listing. Every criterion is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftQuery {
    /// Earliest date to include.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Latest date to include.
    #[serde(default)]
    pub to: Option<NaiveDate>,
    /// Only shifts of this employee.
    #[serde(default)]
    pub employee_id: Option<u64>,
    /// Case-insensitive substring of the notes.
    #[serde(default)]
    pub search: Option<String>,
}

impl ShiftQuery {
    /// Returns true if the shift passes every criterion.
    ///
    /// Soft-deleted shifts never match. A shift without a date fails any
    /// date bound.
    pub fn matches(&self, shift: &Shift) -> bool {
        if !shift.is_active() {
            return false;
        }
        if let Some(from) = self.from {
            if shift.date.is_none_or(|d| d < from) {
                return false;
            }
        }
        if let Some(to) = self.to {
            if shift.date.is_none_or(|d| d > to) {
                return false;
            }
        }
        if let Some(employee_id) = self.employee_id {
            if shift.employee_id != Some(employee_id) {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                shift
                    .notes
                    .as_deref()
                    .is_some_and(|notes| notes.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }

    /// Returns the matching shifts, newest first.
    ///
    /// Ordered by date descending, then start time descending. Shifts
    /// without a date sort last.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::calculation::ShiftQuery;
    ///
    /// let query = ShiftQuery::default();
    /// assert!(query.apply(&[]).is_empty());
    /// ```
    pub fn apply(&self, shifts: &[Shift]) -> Vec<Shift> {
        let mut matching: Vec<Shift> = shifts.iter().filter(|s| self.matches(s)).cloned().collect();
        matching.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.start_time.cmp(&a.start_time))
        });
        matching
    }
}

/// Totals shown beneath a shift listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftStatistics {
    /// Number of shifts listed.
    pub record_count: usize,
    /// Sum of worked hours.
    pub total_hours: Decimal,
    /// Sum of `hours * hourly_rate` per shift.
    pub total_amount: Decimal,
}

impl ShiftStatistics {
    /// Collects statistics over a set of shifts.
    ///
    /// A shift's hours are its cached `work_hours`, or calculated from its
    /// times when not cached, or zero. A missing rate counts as zero. A
    /// shift whose figures would overflow the totals is listed but adds
    /// nothing.
    pub fn collect(shifts: &[Shift]) -> Self {
        let mut total_hours = Decimal::ZERO;
        let mut total_amount = Decimal::ZERO;

        for shift in shifts {
            let hours = shift
                .work_hours
                .or_else(|| calculate_recorded_shift(shift).map(|c| c.work_hours))
                .unwrap_or(Decimal::ZERO);
            let rate = Decimal::from(shift.hourly_rate.unwrap_or(0));
            let totals = hours.checked_mul(rate).and_then(|amount| {
                total_hours
                    .checked_add(hours)
                    .zip(total_amount.checked_add(round_to_cents(amount)))
            });
            match totals {
                Some((hours, amount)) => {
                    total_hours = hours;
                    total_amount = amount;
                }
                None => warn!(shift_id = shift.id, "Shift figures overflow listing totals"),
            }
        }

        Self {
            record_count: shifts.len(),
            total_hours: round_to_cents(total_hours),
            total_amount: round_to_cents(total_amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_shift(id: u64, employee_id: u64, date: &str, start: u32, notes: Option<&str>) -> Shift {
        Shift {
            id,
            employee_id: Some(employee_id),
            workplace_id: Some(1),
            date: Some(make_date(date)),
            start_time: NaiveTime::from_hms_opt(start, 0, 0),
            end_time: NaiveTime::from_hms_opt(start + 4, 0, 0),
            break_minutes: Some(0),
            hourly_rate: Some(300),
            work_hours: None,
            total_earned: None,
            notes: notes.map(str::to_string),
            is_deleted: false,
        }
    }

    fn sample_shifts() -> Vec<Shift> {
        vec![
            make_shift(1, 1, "2026-01-05", 9, Some("Opening shift")),
            make_shift(2, 2, "2026-01-06", 9, None),
            make_shift(3, 1, "2026-01-06", 14, Some("stocktake")),
            make_shift(4, 1, "2026-02-01", 9, None),
        ]
    }

    fn ids(shifts: &[Shift]) -> Vec<u64> {
        shifts.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_default_query_lists_everything_newest_first() {
        let result = ShiftQuery::default().apply(&sample_shifts());
        assert_eq!(ids(&result), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let query = ShiftQuery {
            from: Some(make_date("2026-01-06")),
            to: Some(make_date("2026-01-31")),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&sample_shifts())), vec![3, 2]);
    }

    #[test]
    fn test_undated_shift_fails_date_bound() {
        let mut shift = make_shift(9, 1, "2026-01-06", 9, None);
        shift.date = None;
        let query = ShiftQuery {
            from: Some(make_date("2026-01-01")),
            ..Default::default()
        };
        assert!(!query.matches(&shift));
        assert!(ShiftQuery::default().matches(&shift));
    }

    #[test]
    fn test_employee_filter() {
        let query = ShiftQuery {
            employee_id: Some(2),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&sample_shifts())), vec![2]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = ShiftQuery {
            search: Some("  OPENING ".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&sample_shifts())), vec![1]);
    }

    #[test]
    fn test_blank_search_matches_all() {
        let query = ShiftQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&sample_shifts()).len(), 4);
    }

    #[test]
    fn test_deleted_shifts_are_hidden() {
        let mut shifts = sample_shifts();
        shifts[0].is_deleted = true;
        assert_eq!(ids(&ShiftQuery::default().apply(&shifts)), vec![4, 3, 2]);
    }

    #[test]
    fn test_statistics_over_listing() {
        let stats = ShiftStatistics::collect(&sample_shifts());
        assert_eq!(stats.record_count, 4);
        assert_eq!(stats.total_hours, dec("16.00"));
        assert_eq!(stats.total_amount, dec("4800.00"));
    }

    #[test]
    fn test_statistics_prefers_cached_hours() {
        let mut shift = make_shift(1, 1, "2026-01-05", 9, None);
        shift.work_hours = Some(dec("2.5"));
        let stats = ShiftStatistics::collect(&[shift]);
        assert_eq!(stats.total_hours, dec("2.50"));
        assert_eq!(stats.total_amount, dec("750.00"));
    }

    #[test]
    fn test_statistics_missing_rate_counts_zero_amount() {
        let mut shift = make_shift(1, 1, "2026-01-05", 9, None);
        shift.hourly_rate = None;
        shift.work_hours = Some(dec("4"));
        let stats = ShiftStatistics::collect(&[shift]);
        assert_eq!(stats.total_hours, dec("4.00"));
        assert_eq!(stats.total_amount, dec("0"));
    }

    #[test]
    fn test_statistics_skip_overflowing_shift() {
        let mut huge = make_shift(1, 1, "2026-01-05", 9, None);
        huge.work_hours = Some(Decimal::MAX);
        let shifts = vec![huge, make_shift(2, 1, "2026-01-06", 9, None)];

        let stats = ShiftStatistics::collect(&shifts);

        assert_eq!(stats.record_count, 2);
        assert_eq!(stats.total_hours, dec("4.00"));
        assert_eq!(stats.total_amount, dec("1200.00"));
    }

    #[test]
    fn test_statistics_empty() {
        let stats = ShiftStatistics::collect(&[]);
        assert_eq!(stats.record_count, 0);
        assert_eq!(stats.total_hours.to_string(), "0.00");
        assert_eq!(stats.total_amount.to_string(), "0.00");
    }
}
