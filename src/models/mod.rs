//! Core data models for the shift payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod advance;
mod employee;
mod pay_period;
mod payout;
mod period_summary;
mod shift;

pub use advance::{Advance, AdvanceEdit};
pub use employee::Employee;
pub use pay_period::PayPeriod;
pub use payout::PayoutDraft;
pub use period_summary::{AggregationWarning, PeriodSummary, RecordKind, WarningCode};
pub use shift::Shift;
