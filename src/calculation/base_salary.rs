//! Base salary calculation functionality.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Calculates the base salary for one attendance entry.
///
/// The result is the exact product `total_hours * salary_per_hour`. No
/// rounding or currency truncation is applied, and the operands are not
/// validated: negative inputs produce a negative salary.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if the product does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::compute_base_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = compute_base_salary(
///     Decimal::from_str("7.5").unwrap(),
///     Decimal::from_str("12.0").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(salary, Decimal::from_str("90.0").unwrap());
/// ```
pub fn compute_base_salary(
    total_hours: Decimal,
    salary_per_hour: Decimal,
) -> EngineResult<Decimal> {
    total_hours
        .checked_mul(salary_per_hour)
        .ok_or_else(|| EngineError::overflow("base salary"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_seven_and_a_half_hours_at_twelve() {
        assert_eq!(compute_base_salary(dec("7.5"), dec("12.0")).unwrap(), dec("90.0"));
    }

    #[test]
    fn test_product_keeps_full_precision() {
        // 3.333 * 7.777 = 25.920741, no currency rounding
        assert_eq!(
            compute_base_salary(dec("3.333"), dec("7.777")).unwrap(),
            dec("25.920741")
        );
    }

    #[test]
    fn test_zero_hours_yields_zero() {
        assert_eq!(compute_base_salary(Decimal::ZERO, dec("45.10")).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_hours_propagate() {
        assert_eq!(compute_base_salary(dec("-2"), dec("10")).unwrap(), dec("-20"));
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = compute_base_salary(Decimal::MAX, dec("2"));
        assert!(matches!(result, Err(EngineError::Overflow { .. })));
    }

    proptest! {
        #[test]
        fn prop_base_salary_is_exact_product(
            hours_cents in 0i64..100_000,
            rate_cents in 0i64..1_000_000,
        ) {
            let hours = Decimal::new(hours_cents, 2);
            let rate = Decimal::new(rate_cents, 2);
            prop_assert_eq!(compute_base_salary(hours, rate).unwrap(), hours * rate);
        }
    }
}
