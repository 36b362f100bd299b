//! Course catalog domain module.
//!
//! This module contains the generated-content entities (recommended courses,
//! their curriculum modules, quizzes and questions), the static fallback
//! presets, and the repository traits for persisting them.
//!
//! # Module Structure
//!
//! - `model`: Core catalog domain models (`RecommendedCourse`, `Module`,
//!   `Quiz`, `Question`)
//! - `preset`: Fixed fallback content substituted when generation fails
//! - `repository`: Repository traits for catalog persistence

mod model;
mod preset;
mod repository;

pub use model::{Module, ModuleType, Question, Quiz, RecommendedCourse};
pub use preset::{fallback_courses, fallback_curriculum};
pub use repository::{CourseRepository, QuizRepository};
