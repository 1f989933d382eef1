//! Attendance entry model.
//!
//! This module defines the [`AttendanceEntry`] type, one raw row of the
//! attendance store: an employee's worked hours and hourly rate on a date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day of attendance as recorded by the attendance store.
///
/// Entries are read-only to the payroll core; reports annotate them with
/// derived figures but never write them back.
///
/// # Example
///
/// ```
/// use hr_payroll::models::AttendanceEntry;
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
/// assert!(entry.belongs_to("EM000001"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Identifier of the employee who worked.
    pub employee_id: String,
    /// The calendar date worked.
    pub date: NaiveDate,
    /// Hours worked on that date.
    pub total_hours: Decimal,
    /// Hourly rate applicable to those hours.
    pub salary_per_hour: Decimal,
}

impl AttendanceEntry {
    /// Returns true if this entry was recorded for `employee_id`.
    ///
    /// Identifiers are compared exactly, without trimming or case folding.
    pub fn belongs_to(&self, employee_id: &str) -> bool {
        self.employee_id == employee_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
employee_id: EM000001
date: 2024-03-04
total_hours: 7.5
salary_per_hour: "12.00"
"#;
        let entry: AttendanceEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.employee_id, "EM000001");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(entry.total_hours, Decimal::from_str("7.5").unwrap());
        assert_eq!(entry.salary_per_hour, Decimal::from_str("12").unwrap());
    }

    #[test]
    fn test_belongs_to_is_exact_match() {
        let entry = AttendanceEntry {
            employee_id: "EM000001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            total_hours: Decimal::from(8),
            salary_per_hour: Decimal::from(10),
        };
        assert!(entry.belongs_to("EM000001"));
        assert!(!entry.belongs_to("em000001"));
        assert!(!entry.belongs_to("EM000001 "));
    }
}
