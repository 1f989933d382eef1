//! Calculation logic for the payroll service.
//!
//! This module contains the base salary calculation, the benefit allowance
//! aggregation (hours converted to rounded days, scaled by each enrollment's
//! per-day amount), and the daily salary report that combines both over the
//! attendance store.

mod allowance;
mod base_salary;
mod report;

pub use allowance::{ACTUAL_DAYS_SCALE, STANDARD_WORKDAY_HOURS, actual_days, compute_allowance};
pub use base_salary::compute_base_salary;
pub use report::DailySalaryReport;
