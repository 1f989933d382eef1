//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::DailySalaryReport;
use crate::store::{AttendanceSource, BenefitEnrollmentSource, Dataset};

/// Shared application state.
///
/// Holds the read-only stores every request reports over. The stores are
/// never written after startup, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    attendance: Arc<dyn AttendanceSource>,
    enrollments: Arc<dyn BenefitEnrollmentSource>,
}

impl AppState {
    /// Creates a new application state over the given stores.
    pub fn new(
        attendance: Arc<dyn AttendanceSource>,
        enrollments: Arc<dyn BenefitEnrollmentSource>,
    ) -> Self {
        Self {
            attendance,
            enrollments,
        }
    }

    /// Creates a new application state from a loaded dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let (attendance, enrollments) = dataset.into_parts();
        Self::new(Arc::new(attendance), Arc::new(enrollments))
    }

    /// Returns a report over this state's stores.
    pub fn report(&self) -> DailySalaryReport<'_> {
        DailySalaryReport::new(self.attendance.as_ref(), self.enrollments.as_ref())
    }
}
