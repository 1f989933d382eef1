//! YAML dataset loading.
//!
//! A dataset directory holds `attendance.yaml` and `enrollments.yaml`. Both
//! are read once at startup into the in-memory stores.

use std::path::Path;

use serde::Deserialize;

use crate::config::load_yaml;
use crate::error::EngineResult;
use crate::models::{AttendanceEntry, BenefitEnrollment};

use super::{InMemoryAttendance, InMemoryEnrollments};

/// Name of the attendance file inside a dataset directory.
pub const ATTENDANCE_FILE: &str = "attendance.yaml";

/// Name of the enrollment file inside a dataset directory.
pub const ENROLLMENTS_FILE: &str = "enrollments.yaml";

#[derive(Debug, Deserialize)]
struct AttendanceFile {
    #[serde(default)]
    attendance: Vec<AttendanceEntry>,
}

#[derive(Debug, Deserialize)]
struct EnrollmentsFile {
    #[serde(default)]
    enrollments: Vec<BenefitEnrollment>,
}

/// Attendance and enrollment stores loaded from a dataset directory.
#[derive(Debug, Clone)]
pub struct Dataset {
    attendance: InMemoryAttendance,
    enrollments: InMemoryEnrollments,
}

impl Dataset {
    /// Loads both dataset files from `path`.
    ///
    /// Returns `ConfigNotFound` if either file is missing and
    /// `ConfigParseError` if either contains invalid YAML or records.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let attendance = load_yaml::<AttendanceFile>(&path.join(ATTENDANCE_FILE))?;
        let enrollments = load_yaml::<EnrollmentsFile>(&path.join(ENROLLMENTS_FILE))?;

        Ok(Self {
            attendance: InMemoryAttendance::new(attendance.attendance),
            enrollments: InMemoryEnrollments::new(enrollments.enrollments),
        })
    }

    /// Returns the attendance store.
    pub fn attendance(&self) -> &InMemoryAttendance {
        &self.attendance
    }

    /// Returns the enrollment store.
    pub fn enrollments(&self) -> &InMemoryEnrollments {
        &self.enrollments
    }

    /// Splits the dataset into its two stores.
    pub fn into_parts(self) -> (InMemoryAttendance, InMemoryEnrollments) {
        (self.attendance, self.enrollments)
    }
}
