//! Daily salary report assembly.
//!
//! This module combines attendance entries with the base salary and
//! allowance calculations to produce report rows. Nothing is cached between
//! calls: every report re-reads both sources and recomputes every figure.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEntry, BenefitEnrollment, DailySalaryRow, MonthlySalarySummary};
use crate::store::{AttendanceSource, BenefitEnrollmentSource};

use super::{STANDARD_WORKDAY_HOURS, compute_allowance, compute_base_salary};

/// Assembles daily salary reports from injected attendance and enrollment
/// sources.
///
/// # Example
///
/// ```
/// use hr_payroll::calculation::DailySalaryReport;
/// use hr_payroll::models::{AttendanceEntry, BenefitEnrollment};
/// use hr_payroll::store::{InMemoryAttendance, InMemoryEnrollments};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let attendance = InMemoryAttendance::new(vec![AttendanceEntry {
///     employee_id: "EM000001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     total_hours: Decimal::from(8),
///     salary_per_hour: Decimal::from(15),
/// }]);
/// let enrollments = InMemoryEnrollments::new(vec![BenefitEnrollment {
///     employee_id: "EM000001".to_string(),
///     amount_per_day: Some(Decimal::from(20)),
///     benefit_name: None,
/// }]);
///
/// let report = DailySalaryReport::new(&attendance, &enrollments);
/// let rows = report.get_all_rows().unwrap();
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].base_salary, Decimal::from(120));
/// assert_eq!(rows[0].daily_allowance, Decimal::from(20));
/// ```
pub struct DailySalaryReport<'a> {
    attendance: &'a dyn AttendanceSource,
    enrollments: &'a dyn BenefitEnrollmentSource,
}

impl<'a> DailySalaryReport<'a> {
    /// Creates a report over the given sources.
    pub fn new(
        attendance: &'a dyn AttendanceSource,
        enrollments: &'a dyn BenefitEnrollmentSource,
    ) -> Self {
        Self {
            attendance,
            enrollments,
        }
    }

    /// Returns one row per attendance entry, in the source's order.
    ///
    /// # Errors
    ///
    /// Propagates any fault raised by either source, and
    /// [`EngineError::Overflow`] from the calculations.
    pub fn get_all_rows(&self) -> EngineResult<Vec<DailySalaryRow>> {
        let entries = self.attendance.get_all()?;
        self.build_rows(entries)
    }

    /// Returns the rows of `employee_id` whose month matches the month of
    /// `reference_date`.
    ///
    /// Only the month number is compared. An entry from any year that falls
    /// in the same calendar month is included, so a reference date of
    /// 2024-03-01 selects March 2022 and March 2023 entries as well.
    pub fn get_rows_for_employee_in_month(
        &self,
        employee_id: &str,
        reference_date: NaiveDate,
    ) -> EngineResult<Vec<DailySalaryRow>> {
        let entries: Vec<AttendanceEntry> = self
            .attendance
            .get_all()?
            .into_iter()
            .filter(|entry| in_month(entry, employee_id, reference_date))
            .collect();

        debug!(
            employee_id = %employee_id,
            month = reference_date.month(),
            matched = entries.len(),
            "Filtered attendance entries by month"
        );

        self.build_rows(entries)
    }

    /// Totals an employee's month into a payslip summary.
    ///
    /// Uses the same month-only filter as
    /// [`get_rows_for_employee_in_month`](Self::get_rows_for_employee_in_month).
    /// The allowance is computed once for the month's total hours rather than
    /// summed from the per-row daily figures.
    pub fn monthly_summary(
        &self,
        employee_id: &str,
        reference_date: NaiveDate,
    ) -> EngineResult<MonthlySalarySummary> {
        let rows = self.get_rows_for_employee_in_month(employee_id, reference_date)?;
        let month = reference_date.month();

        if rows.is_empty() {
            return Ok(MonthlySalarySummary::empty(employee_id, month));
        }

        let days_worked = checked_count(rows.len(), "days worked")?;

        let total_hours = checked_sum(rows.iter().map(|row| row.total_hours), "total hours")?;
        let total_base_salary =
            checked_sum(rows.iter().map(|row| row.base_salary), "total base salary")?;
        let allowance_sum = self.enrollments.allowance_sum(employee_id, total_hours)?;
        let gross_pay = total_base_salary
            .checked_add(allowance_sum)
            .ok_or_else(|| EngineError::overflow("gross pay"))?;

        Ok(MonthlySalarySummary {
            employee_id: employee_id.to_string(),
            month,
            days_worked,
            total_hours,
            total_base_salary,
            allowance_sum,
            gross_pay,
        })
    }

    fn build_rows(&self, entries: Vec<AttendanceEntry>) -> EngineResult<Vec<DailySalaryRow>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let enrollments = self.enrollments.get_all()?;
        // Daily allowance depends only on the employee, so compute it once per id.
        let mut allowances: HashMap<String, Decimal> = HashMap::new();
        let mut rows = Vec::with_capacity(entries.len());

        for entry in &entries {
            let base_salary = compute_base_salary(entry.total_hours, entry.salary_per_hour)?;
            let daily_allowance = match allowances.get(&entry.employee_id) {
                Some(allowance) => *allowance,
                None => {
                    let allowance = standard_day_allowance(&entry.employee_id, &enrollments)?;
                    allowances.insert(entry.employee_id.clone(), allowance);
                    allowance
                }
            };
            rows.push(DailySalaryRow::from_entry(entry, base_salary, daily_allowance));
        }

        Ok(rows)
    }
}

fn in_month(entry: &AttendanceEntry, employee_id: &str, reference_date: NaiveDate) -> bool {
    entry.belongs_to(employee_id) && entry.date.month() == reference_date.month()
}

fn standard_day_allowance(
    employee_id: &str,
    enrollments: &[BenefitEnrollment],
) -> EngineResult<Decimal> {
    compute_allowance(employee_id, Decimal::from(STANDARD_WORKDAY_HOURS), enrollments)
}

fn checked_count(count: usize, operation: &str) -> EngineResult<u32> {
    u32::try_from(count).map_err(|_| EngineError::overflow(operation))
}

fn checked_sum(
    mut values: impl Iterator<Item = Decimal>,
    operation: &str,
) -> EngineResult<Decimal> {
    values.try_fold(Decimal::ZERO, |total, value| {
        total
            .checked_add(value)
            .ok_or_else(|| EngineError::overflow(operation))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryAttendance, InMemoryEnrollments};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(employee_id: &str, on: NaiveDate, hours: &str, rate: &str) -> AttendanceEntry {
        AttendanceEntry {
            employee_id: employee_id.to_string(),
            date: on,
            total_hours: dec(hours),
            salary_per_hour: dec(rate),
        }
    }

    fn enrollment(employee_id: &str, amount: Option<&str>) -> BenefitEnrollment {
        BenefitEnrollment {
            employee_id: employee_id.to_string(),
            amount_per_day: amount.map(dec),
            benefit_name: None,
        }
    }

    fn create_test_attendance() -> InMemoryAttendance {
        InMemoryAttendance::new(vec![
            entry("EM000001", date(2022, 3, 15), "7.5", "12.0"),
            entry("EM000002", date(2024, 3, 4), "8", "15"),
            entry("EM000001", date(2023, 3, 2), "21", "10"),
            entry("EM000001", date(2024, 4, 1), "8", "12.5"),
        ])
    }

    fn create_test_enrollments() -> InMemoryEnrollments {
        InMemoryEnrollments::new(vec![
            enrollment("EM000001", Some("100")),
            enrollment("EM000001", None),
            enrollment("EM000002", Some("25.50")),
        ])
    }

    struct FailingAttendance;

    impl AttendanceSource for FailingAttendance {
        fn get_all(&self) -> EngineResult<Vec<AttendanceEntry>> {
            Err(EngineError::data_access("attendance records", "database unreachable"))
        }
    }

    struct FailingEnrollments;

    impl BenefitEnrollmentSource for FailingEnrollments {
        fn get_all(&self) -> EngineResult<Vec<BenefitEnrollment>> {
            Err(EngineError::data_access("benefit enrollments", "database unreachable"))
        }
    }

    #[test]
    fn test_all_rows_one_per_entry_in_source_order() {
        let attendance = create_test_attendance();
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&attendance, &enrollments);

        let rows = report.get_all_rows().unwrap();
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date(2022, 3, 15), date(2024, 3, 4), date(2023, 3, 2), date(2024, 4, 1)]
        );
    }

    #[test]
    fn test_base_salary_is_hours_times_rate() {
        let attendance = create_test_attendance();
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&attendance, &enrollments);

        let rows = report.get_all_rows().unwrap();
        assert_eq!(rows[0].base_salary, dec("90.0"));
        assert_eq!(rows[1].base_salary, dec("120"));
        assert_eq!(rows[2].base_salary, dec("210"));
        assert_eq!(rows[3].base_salary, dec("100"));
    }

    #[test]
    fn test_daily_allowance_is_same_for_every_row_of_employee() {
        let attendance = create_test_attendance();
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&attendance, &enrollments);

        let rows = report.get_all_rows().unwrap();
        let em1: Vec<Decimal> = rows
            .iter()
            .filter(|r| r.employee_id == "EM000001")
            .map(|r| r.daily_allowance)
            .collect();
        // One standard day: 1.00 * 100 + 1.00 * 0, regardless of each row's hours
        assert_eq!(em1, vec![dec("100"), dec("100"), dec("100")]);
        assert_eq!(rows[1].daily_allowance, dec("25.50"));
    }

    #[test]
    fn test_employee_without_enrollments_gets_zero_allowance() {
        let attendance =
            InMemoryAttendance::new(vec![entry("EM000009", date(2024, 3, 1), "8", "10")]);
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&attendance, &enrollments);

        let rows = report.get_all_rows().unwrap();
        assert_eq!(rows[0].daily_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_month_filter_ignores_year() {
        let attendance = create_test_attendance();
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&attendance, &enrollments);

        let rows = report
            .get_rows_for_employee_in_month("EM000001", date(2024, 3, 1))
            .unwrap();

        // 2022-03-15 and 2023-03-02 both match a March 2024 reference date
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2022, 3, 15), date(2023, 3, 2)]);
    }

    #[test]
    fn test_month_filter_excludes_other_employees_and_months() {
        let attendance = create_test_attendance();
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&attendance, &enrollments);

        let april = report
            .get_rows_for_employee_in_month("EM000001", date(2021, 4, 30))
            .unwrap();
        assert_eq!(april.len(), 1);
        assert_eq!(april[0].date, date(2024, 4, 1));

        let unknown = report
            .get_rows_for_employee_in_month("EM000404", date(2024, 3, 1))
            .unwrap();
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_get_all_rows_is_idempotent() {
        let attendance = create_test_attendance();
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&attendance, &enrollments);

        let first = report.get_all_rows().unwrap();
        let second = report.get_all_rows().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_attendance_fault_propagates_unchanged() {
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&FailingAttendance, &enrollments);

        let error = report.get_all_rows().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Failed to read attendance records: database unreachable"
        );
    }

    #[test]
    fn test_enrollment_fault_propagates_unchanged() {
        let attendance = create_test_attendance();
        let report = DailySalaryReport::new(&attendance, &FailingEnrollments);

        let result = report.get_rows_for_employee_in_month("EM000001", date(2024, 3, 1));
        assert!(matches!(result, Err(EngineError::DataAccess { .. })));
    }

    #[test]
    fn test_monthly_summary_totals_month_rows() {
        let attendance = create_test_attendance();
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&attendance, &enrollments);

        let summary = report.monthly_summary("EM000001", date(2024, 3, 1)).unwrap();

        assert_eq!(summary.month, 3);
        assert_eq!(summary.days_worked, 2);
        assert_eq!(summary.total_hours, dec("28.5"));
        assert_eq!(summary.total_base_salary, dec("300"));
        // 28.5 / 8 = 3.5625 -> 3.56 days; 3.56 * 100 + 3.56 * 0
        assert_eq!(summary.allowance_sum, dec("356"));
        assert_eq!(summary.gross_pay, dec("656"));
    }

    #[test]
    fn test_monthly_summary_without_rows_is_empty() {
        let attendance = create_test_attendance();
        let enrollments = create_test_enrollments();
        let report = DailySalaryReport::new(&attendance, &enrollments);

        let summary = report.monthly_summary("EM000002", date(2024, 7, 1)).unwrap();
        assert_eq!(summary, MonthlySalarySummary::empty("EM000002", 7));
    }

    #[test]
    fn test_day_count_fits_u32() {
        assert_eq!(checked_count(0, "days worked").unwrap(), 0);
        assert_eq!(checked_count(31, "days worked").unwrap(), 31);
        assert_eq!(checked_count(u32::MAX as usize, "days worked").unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_day_count_beyond_u32_is_overflow() {
        let error = checked_count(u32::MAX as usize + 1, "days worked").unwrap_err();
        assert!(matches!(error, EngineError::Overflow { .. }));
        assert_eq!(error.to_string(), "Numeric overflow while computing days worked");
    }
}
