//! Request types for the payroll API.
//!
//! This module defines the JSON body shared by the month-filtered report
//! endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body selecting one employee's month.
///
/// Field names are camelCase on the wire; the PascalCase spellings
/// `EmployeeId` and `Date` are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySalaryRequest {
    /// The employee to report on.
    #[serde(alias = "EmployeeId")]
    pub employee_id: String,
    /// Any date in the month to report on. Only its month number is used.
    ///
    /// A date-time is accepted too; its time and offset are dropped.
    #[serde(alias = "Date", deserialize_with = "crate::models::wire::deserialize_date_part")]
    pub date: NaiveDate,
}
