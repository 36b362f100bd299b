//! Catalog domain models.
//!
//! Recommended courses and their generated curriculum. Wire names are
//! camelCase to match the shared store's entity schema.

use serde::{Deserialize, Serialize};

/// The kind of content a curriculum module carries.
///
/// The interpretation of [`Module::content`] depends on this: a video
/// reference, prose text, or a short descriptive placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Video,
    Article,
    Quiz,
    Assignment,
}

/// A generated course suggestion linked to the owning user.
///
/// Created by the generation pipeline, either from AI output or from the
/// static fallback list. Mutated later only to attach generated `modules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCourse {
    /// Unique identifier (UUID format)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Broad category, e.g. "IT", "Healthcare", "Soft Skills"
    pub category: String,
    /// Estimated NSQF level, e.g. "NSQF Level 4"
    pub level: String,
    /// Realistic duration estimate, e.g. "3 Months"
    pub duration: String,
    pub rating: f64,
    pub enrolled_count: u32,
    /// `None` until a curriculum has been generated for this course.
    /// `Some` afterward, even when generation degraded to the fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
}

/// One lesson unit belonging to a course.
///
/// Created in a batch when the course's curriculum is generated; immutable
/// afterward except for quiz content being attached to the adjacent quiz
/// entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique identifier (UUID format)
    pub id: String,
    pub title: String,
    pub description: String,
    /// e.g. "1 Hour"
    pub duration: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// Video reference, article text, or descriptive placeholder,
    /// depending on `module_type`
    pub content: String,
    /// Position in the curriculum sequence; authoritative for ordering
    pub order: u32,
}

/// A quiz attached to exactly one `quiz`-typed module.
///
/// Created lazily, only when a user opens the module and no quiz yet
/// exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Unique identifier (UUID format)
    pub id: String,
    /// The module this quiz belongs to
    pub module_id: String,
    pub title: String,
    pub description: String,
}

/// One multiple-choice question owned by a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier (UUID format)
    pub id: String,
    /// The quiz this question belongs to
    pub quiz_id: String,
    pub question: String,
    /// Exactly 4 options; enforced at the generation boundary
    pub options: Vec<String>,
    /// Always a member of `options`
    pub correct_answer: String,
    pub explanation: String,
    /// Position within the quiz; authoritative for ordering
    pub order: u32,
}
