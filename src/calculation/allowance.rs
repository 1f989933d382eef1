//! Benefit allowance calculation functionality.
//!
//! This module converts hours worked into whole-and-fractional days and
//! scales every per-day benefit amount an employee is enrolled in by that
//! number of days.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::BenefitEnrollment;

/// Number of hours that make up one standard working day.
pub const STANDARD_WORKDAY_HOURS: u32 = 8;

/// Decimal places kept when converting hours to days.
pub const ACTUAL_DAYS_SCALE: u32 = 2;

/// Converts hours worked into days worked.
///
/// The result is `actual_hours / 8` rounded to two decimal places, with
/// midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::actual_days;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(actual_days(Decimal::from(21)), Decimal::from_str("2.63").unwrap());
/// assert_eq!(actual_days(Decimal::from(20)), Decimal::from_str("2.50").unwrap());
/// ```
pub fn actual_days(actual_hours: Decimal) -> Decimal {
    (actual_hours / Decimal::from(STANDARD_WORKDAY_HOURS))
        .round_dp_with_strategy(ACTUAL_DAYS_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the allowance an employee earns for `actual_hours` of work.
///
/// Only enrollments whose `employee_id` matches exactly are counted; no
/// date-range or status filtering happens here. Each matching enrollment
/// contributes `actual_days(actual_hours) * amount_per_day`, with a missing
/// amount counting as zero.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if a contribution or the running total
/// does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::compute_allowance;
/// use hr_payroll::models::BenefitEnrollment;
/// use rust_decimal::Decimal;
///
/// let enrollments = vec![
///     BenefitEnrollment {
///         employee_id: "EM000001".to_string(),
///         amount_per_day: Some(Decimal::from(100)),
///         benefit_name: None,
///     },
///     BenefitEnrollment {
///         employee_id: "EM000001".to_string(),
///         amount_per_day: None,
///         benefit_name: None,
///     },
/// ];
///
/// let allowance = compute_allowance("EM000001", Decimal::from(16), &enrollments).unwrap();
/// assert_eq!(allowance, Decimal::from(200));
/// ```
pub fn compute_allowance(
    employee_id: &str,
    actual_hours: Decimal,
    enrollments: &[BenefitEnrollment],
) -> EngineResult<Decimal> {
    let days = actual_days(actual_hours);

    enrollments
        .iter()
        .filter(|enrollment| enrollment.employee_id == employee_id)
        .try_fold(Decimal::ZERO, |total, enrollment| {
            days.checked_mul(enrollment.amount_or_zero())
                .and_then(|contribution| total.checked_add(contribution))
                .ok_or_else(|| EngineError::overflow("benefit allowance"))
        })
}
