//! Calculation logic for the shift payroll engine.
//!
//! This module contains the pure calculations behind payroll: turning one
//! shift's times into worked hours and earnings, aggregating an employee's
//! shifts and advances over a pay period, refreshing stale cached figures,
//! and filtering shift listings with their running totals.

mod period_aggregator;
mod recalculation;
mod shift_calculator;
mod shift_query;

pub use period_aggregator::{aggregate, shift_figures};
pub use recalculation::{RecalculationResult, recalculate_shifts};
pub use shift_calculator::{
    ShiftCalculation, calculate_recorded_shift, calculate_shift, round_to_cents,
};
pub use shift_query::{ShiftQuery, ShiftStatistics};
