//! Enrollment repository trait.
//!
//! Uniqueness per (user, course) is enforced here, at the persistence
//! boundary, rather than only by caller-side checks.

use super::model::Enrollment;
use crate::error::Result;

/// An abstract repository for enrollments.
#[async_trait::async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Finds the enrollment for a (user, course) pair, if any.
    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<Enrollment>>;

    /// Lists all enrollments belonging to a user.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Enrollment>>;

    /// Persists one enrollment.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Enrollment persisted
    /// - `Err(DishaError::AlreadyExists)`: The (user, course) pair already
    ///   has an enrollment; no duplicate is written
    /// - `Err(DishaError::PersistenceFailed)`: Write failed
    async fn insert(&self, enrollment: &Enrollment) -> Result<()>;
}
