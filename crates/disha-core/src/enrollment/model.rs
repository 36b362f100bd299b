//! Enrollment domain model.
//!
//! Links a user to a recommended course with progress tracking. At most one
//! enrollment exists per (user, course) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Completed,
}

impl Default for EnrollmentStatus {
    fn default() -> Self {
        EnrollmentStatus::Active
    }
}

/// A user's enrollment in one recommended course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Unique identifier (UUID format)
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    /// Completion percentage, 0-100 inclusive
    pub progress: u8,
    #[serde(default)]
    pub status: EnrollmentStatus,
    pub last_accessed: DateTime<Utc>,
}
