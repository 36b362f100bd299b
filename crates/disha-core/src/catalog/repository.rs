//! Catalog repository traits.
//!
//! Defines the store boundary for courses, curriculum modules, and quizzes.
//! Batch operations are atomic: partial failure must not leave a subset of
//! records persisted.

use super::model::{Question, Quiz, RecommendedCourse};
use crate::catalog::Module;
use crate::error::Result;

/// An abstract repository for recommended courses and their curricula.
///
/// Implementations persist each course linked to its owning user and keep
/// the module sequence exactly as written (ordering is carried by the
/// `order` field, not insertion time).
#[async_trait::async_trait]
pub trait CourseRepository: Send + Sync {
    /// Finds a course by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(RecommendedCourse))`: Course found
    /// - `Ok(None)`: Course not found
    /// - `Err(DishaError)`: Error occurred during retrieval
    async fn find_by_id(&self, course_id: &str) -> Result<Option<RecommendedCourse>>;

    /// Lists all recommended courses linked to a user.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<RecommendedCourse>>;

    /// Persists a batch of courses linked to a user, atomically.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Every course persisted
    /// - `Err(DishaError::PersistenceFailed)`: Nothing persisted
    async fn insert_batch(&self, user_id: &str, courses: &[RecommendedCourse]) -> Result<()>;

    /// Replaces a course's module list in a single update.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Modules written
    /// - `Err(DishaError::NotFound)`: No such course
    /// - `Err(DishaError::PersistenceFailed)`: Write failed, course unchanged
    async fn set_modules(&self, course_id: &str, modules: &[Module]) -> Result<()>;
}

/// An abstract repository for quizzes and their questions.
#[async_trait::async_trait]
pub trait QuizRepository: Send + Sync {
    /// Finds the quiz attached to a module, if any.
    async fn find_by_module(&self, module_id: &str) -> Result<Option<Quiz>>;

    /// Lists a quiz's questions ordered by their `order` field.
    async fn list_questions(&self, quiz_id: &str) -> Result<Vec<Question>>;

    /// Persists one quiz and its question batch, atomically.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Quiz and all questions persisted
    /// - `Err(DishaError::AlreadyExists)`: The module already has a quiz
    /// - `Err(DishaError::PersistenceFailed)`: Nothing persisted
    async fn insert_with_questions(&self, quiz: &Quiz, questions: &[Question]) -> Result<()>;
}
