//! Shift payroll engine for small business workforce management.
//!
//! This crate turns recorded shifts into worked hours and earnings, and
//! settles an employee's pay period by summing shift earnings and
//! subtracting the cash advances paid out during it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
