//! Read-only data sources consumed by the payroll core.
//!
//! The report assembler never reaches for a global store: it is handed an
//! [`AttendanceSource`] and a [`BenefitEnrollmentSource`] explicitly. This
//! module defines those seams and ships an in-memory implementation that can
//! be filled from a YAML dataset directory.
//!
//! # Example
//!
//! ```no_run
//! use hr_payroll::store::{AttendanceSource, Dataset};
//!
//! let dataset = Dataset::load("./config/data").unwrap();
//! let entries = dataset.attendance().get_all().unwrap();
//! println!("Loaded {} attendance entries", entries.len());
//! ```

mod dataset;
mod memory;

use rust_decimal::Decimal;

use crate::calculation::{STANDARD_WORKDAY_HOURS, compute_allowance};
use crate::error::EngineResult;
use crate::models::{AttendanceEntry, BenefitEnrollment};

pub use dataset::Dataset;
pub use memory::{InMemoryAttendance, InMemoryEnrollments};

/// Supplies raw attendance entries.
///
/// Implementations own their data; callers only read it. Entries come back in
/// the store's natural order, which is not guaranteed to be stable.
pub trait AttendanceSource: Send + Sync {
    /// Returns every attendance entry in the store.
    fn get_all(&self) -> EngineResult<Vec<AttendanceEntry>>;
}

/// Supplies benefit enrollments.
///
/// Any filtering by enrollment period or status is the implementation's
/// responsibility; the allowance calculation counts everything returned.
pub trait BenefitEnrollmentSource: Send + Sync {
    /// Returns every benefit enrollment in the store.
    fn get_all(&self) -> EngineResult<Vec<BenefitEnrollment>>;

    /// Returns the allowance `employee_id` earns for one standard working day.
    fn daily_allowance(&self, employee_id: &str) -> EngineResult<Decimal> {
        self.allowance_sum(employee_id, Decimal::from(STANDARD_WORKDAY_HOURS))
    }

    /// Returns the allowance `employee_id` earns for `actual_hours` of work.
    fn allowance_sum(&self, employee_id: &str, actual_hours: Decimal) -> EngineResult<Decimal> {
        compute_allowance(employee_id, actual_hours, &self.get_all()?)
    }
}
