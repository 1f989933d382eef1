//! Daily salary report models.
//!
//! This module contains the derived [`DailySalaryRow`] and
//! [`MonthlySalarySummary`] types returned by the report endpoints. Neither is
//! ever persisted: both are rebuilt from attendance and enrollment data on
//! every request.
//!
//! On the JSON wire every `Decimal` is an exact number (`90.00`, never a
//! string or a rounded float) and a row's date is a midnight date-time
//! (`2024-03-04T00:00:00`), the shapes the web frontend already consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttendanceEntry;

/// One attendance entry annotated with its computed salary figures.
///
/// # Example
///
/// ```
/// use hr_payroll::models::{AttendanceEntry, DailySalaryRow};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = AttendanceEntry {
///     employee_id: "EM000001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     total_hours: Decimal::from_str("7.5").unwrap(),
///     salary_per_hour: Decimal::from_str("12.0").unwrap(),
/// };
///
/// let row = DailySalaryRow::from_entry(
///     &entry,
///     Decimal::from_str("90.00").unwrap(),
///     Decimal::from(100),
/// );
/// assert_eq!(row.employee_id, "EM000001");
/// assert_eq!(row.base_salary, Decimal::from(90));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySalaryRow {
    /// Identifier of the employee who worked.
    pub employee_id: String,
    /// The calendar date worked.
    #[serde(with = "crate::models::wire::midnight_date_time")]
    pub date: NaiveDate,
    /// Hours worked on that date.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_hours: Decimal,
    /// Hourly rate applicable to those hours.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary_per_hour: Decimal,
    /// `total_hours * salary_per_hour`, unrounded.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub base_salary: Decimal,
    /// The employee's allowance for one standard working day.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub daily_allowance: Decimal,
}

impl DailySalaryRow {
    /// Builds a report row from an attendance entry and its computed figures.
    pub fn from_entry(
        entry: &AttendanceEntry,
        base_salary: Decimal,
        daily_allowance: Decimal,
    ) -> Self {
        Self {
            employee_id: entry.employee_id.clone(),
            date: entry.date,
            total_hours: entry.total_hours,
            salary_per_hour: entry.salary_per_hour,
            base_salary,
            daily_allowance,
        }
    }
}

/// Payslip-style totals for one employee over one calendar month.
///
/// The month is matched by month number only, exactly like
/// the month-filtered daily salary report the summary is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalarySummary {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Month number (1-12) the summary covers.
    pub month: u32,
    /// Number of attendance entries included.
    pub days_worked: u32,
    /// Sum of hours over the included entries.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_hours: Decimal,
    /// Sum of base salaries over the included entries.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_base_salary: Decimal,
    /// Allowance earned for `total_hours` across all of the employee's enrollments.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub allowance_sum: Decimal,
    /// `total_base_salary + allowance_sum`.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub gross_pay: Decimal,
}

impl MonthlySalarySummary {
    /// Returns a summary with every figure at zero.
    pub fn empty(employee_id: impl Into<String>, month: u32) -> Self {
        Self {
            employee_id: employee_id.into(),
            month,
            days_worked: 0,
            total_hours: Decimal::ZERO,
            total_base_salary: Decimal::ZERO,
            allowance_sum: Decimal::ZERO,
            gross_pay: Decimal::ZERO,
        }
    }
}
