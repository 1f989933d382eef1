//! Core data models for the payroll service.
//!
//! This module contains the attendance and enrollment records read from the
//! stores, and the derived report types built from them.

mod attendance;
mod daily_salary;
mod enrollment;
pub(crate) mod wire;

pub use attendance::AttendanceEntry;
pub use daily_salary::{DailySalaryRow, MonthlySalarySummary};
pub use enrollment::BenefitEnrollment;
