//! In-memory attendance and enrollment stores.

use crate::error::EngineResult;
use crate::models::{AttendanceEntry, BenefitEnrollment};

use super::{AttendanceSource, BenefitEnrollmentSource};

/// Attendance store backed by a vector, preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendance {
    entries: Vec<AttendanceEntry>,
}

impl InMemoryAttendance {
    /// Creates a store holding `entries`.
    pub fn new(entries: Vec<AttendanceEntry>) -> Self {
        Self { entries }
    }

    /// Returns the number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AttendanceSource for InMemoryAttendance {
    fn get_all(&self) -> EngineResult<Vec<AttendanceEntry>> {
        Ok(self.entries.clone())
    }
}

/// Benefit enrollment store backed by a vector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnrollments {
    enrollments: Vec<BenefitEnrollment>,
}

impl InMemoryEnrollments {
    /// Creates a store holding `enrollments`.
    pub fn new(enrollments: Vec<BenefitEnrollment>) -> Self {
        Self { enrollments }
    }

    /// Returns the number of enrollments held.
    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    /// Returns true if the store holds no enrollments.
    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }
}

impl BenefitEnrollmentSource for InMemoryEnrollments {
    fn get_all(&self) -> EngineResult<Vec<BenefitEnrollment>> {
        Ok(self.enrollments.clone())
    }
}
