//! Enrollment Service
//!
//! Creates the link between a user and a recommended course. Uniqueness is
//! double-checked: a pre-query reports the common duplicate case, and the
//! repository enforces it again at the persistence boundary.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use disha_core::catalog::CourseRepository;
use disha_core::enrollment::{Enrollment, EnrollmentRepository, EnrollmentStatus};
use disha_core::error::{DishaError, Result};

/// Service handling course enrollment.
pub struct EnrollmentService {
    enrollments: Arc<dyn EnrollmentRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl EnrollmentService {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        courses: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            enrollments,
            courses,
        }
    }

    /// Enrolls a user in a course.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the course does not exist
    /// - `AlreadyExists` when the (user, course) pair is already enrolled;
    ///   no duplicate record is created
    pub async fn enroll(&self, user_id: &str, course_id: &str) -> Result<Enrollment> {
        self.courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| DishaError::not_found("course", course_id))?;

        if self
            .enrollments
            .find_by_user_and_course(user_id, course_id)
            .await?
            .is_some()
        {
            return Err(DishaError::already_exists(
                "enrollment",
                format!("{user_id}:{course_id}"),
            ));
        }

        let enrollment = Enrollment {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            progress: 0,
            status: EnrollmentStatus::Active,
            last_accessed: Utc::now(),
        };
        self.enrollments.insert(&enrollment).await?;
        info!(user_id, course_id, "enrollment created");

        Ok(enrollment)
    }
}
