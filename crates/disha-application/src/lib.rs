//! Application layer for the DISHA learning-path engine.
//!
//! Orchestrator services that coordinate generation, enrichment, and
//! persistence as one logical operation each. Every service reports its
//! outcome through an explicit enum, so the generated and fallback paths
//! are statically visible instead of hidden in control flow.

mod course_content_service;
mod enrollment_service;
mod learning_path_service;
mod quiz_service;

pub use course_content_service::{
    CourseContentOutcome, CourseContentService, CourseContentSkipReason,
};
pub use enrollment_service::EnrollmentService;
pub use learning_path_service::{ContentSource, LearningPathOutcome, LearningPathService};
pub use quiz_service::{QuizOutcome, QuizService, QuizSkipReason};
