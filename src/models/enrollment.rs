//! Benefit enrollment model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee's enrollment in a benefit that pays a fixed amount per day.
///
/// A missing `amount_per_day` is legal in the benefit store and counts as a
/// zero contribution to the employee's allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitEnrollment {
    /// Identifier of the enrolled employee.
    pub employee_id: String,
    /// Amount paid per day worked, if the benefit defines one.
    #[serde(default)]
    pub amount_per_day: Option<Decimal>,
    /// Display name of the benefit. Never used in computation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit_name: Option<String>,
}

impl BenefitEnrollment {
    /// Returns the per-day amount, treating an absent amount as zero.
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount_per_day.unwrap_or(Decimal::ZERO)
    }
}
