//! Generated artifact schema registry.
//!
//! Declares, for each artifact kind, the structural contract the generation
//! client must enforce: a provider-facing response schema plus the
//! post-deserialization invariants the schema language cannot express.
//! Invalid generation output is never persisted as a generated artifact;
//! a violation is reported as `GenerationFailed` and call sites either
//! degrade to their fallback content or fail cleanly.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::catalog::ModuleType;
use crate::error::{DishaError, Result};

/// A generated, schema-validated content object.
///
/// Implementors pair a serde shape with the provider-facing response schema
/// and the invariants checked before anything reaches the store.
pub trait Artifact: serde::de::DeserializeOwned {
    /// Artifact kind name, used in error reasons.
    const KIND: &'static str;

    /// The structural contract shipped to the generation service.
    fn response_schema() -> Value;

    /// Invariants beyond the structural schema: enum membership, array
    /// arity, non-empty required strings.
    fn validate(&self) -> Result<()>;
}

fn require_non_empty(kind: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DishaError::generation_failed(format!(
            "{kind}: required field '{field}' is empty"
        )));
    }
    Ok(())
}

// ============================================================================
// Learning path
// ============================================================================

/// One course suggestion within a generated learning path.
///
/// `rating` and `enrolled_count` are not part of the generation contract;
/// they are absent in AI output and authored in fallback presets. The
/// orchestrator fills defaults for whatever is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseArtifact {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled_count: Option<u32>,
}

/// A generated list of recommended courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathArtifact {
    pub courses: Vec<CourseArtifact>,
}

impl Artifact for LearningPathArtifact {
    const KIND: &'static str = "learning_path";

    fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "courses": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string", "description": "e.g. Web Development Bootcamp" },
                            "description": { "type": "string" },
                            "category": { "type": "string", "description": "e.g. IT, Vocational, Soft Skills" },
                            "level": { "type": "string", "description": "e.g. NSQF Level 4" },
                            "duration": { "type": "string", "description": "e.g. 3 Months" }
                        },
                        "required": ["title", "description", "category", "level", "duration"]
                    }
                }
            },
            "required": ["courses"]
        })
    }

    fn validate(&self) -> Result<()> {
        if self.courses.is_empty() {
            return Err(DishaError::generation_failed(
                "learning_path: 'courses' is empty",
            ));
        }
        for course in &self.courses {
            require_non_empty(Self::KIND, "title", &course.title)?;
            require_non_empty(Self::KIND, "description", &course.description)?;
            require_non_empty(Self::KIND, "category", &course.category)?;
            require_non_empty(Self::KIND, "level", &course.level)?;
            require_non_empty(Self::KIND, "duration", &course.duration)?;
        }
        Ok(())
    }
}

// ============================================================================
// Course content
// ============================================================================

/// One curriculum module within a generated course content set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleArtifact {
    pub title: String,
    pub description: String,
    /// e.g. "1 Hour"
    pub duration: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// Summary for video modules (replaced by enrichment), prose text for
    /// articles, descriptive placeholder for quiz/assignment
    pub content: String,
}

/// A generated curriculum for one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseContentArtifact {
    pub modules: Vec<ModuleArtifact>,
}

impl Artifact for CourseContentArtifact {
    const KIND: &'static str = "course_content";

    fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "modules": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "description": { "type": "string" },
                            "duration": { "type": "string", "description": "e.g. 1 Hour" },
                            "type": { "type": "string", "enum": ["video", "quiz", "article", "assignment"] },
                            "content": { "type": "string" }
                        },
                        "required": ["title", "description", "duration", "type", "content"]
                    }
                }
            },
            "required": ["modules"]
        })
    }

    fn validate(&self) -> Result<()> {
        if self.modules.is_empty() {
            return Err(DishaError::generation_failed(
                "course_content: 'modules' is empty",
            ));
        }
        for module in &self.modules {
            require_non_empty(Self::KIND, "title", &module.title)?;
            require_non_empty(Self::KIND, "description", &module.description)?;
            require_non_empty(Self::KIND, "duration", &module.duration)?;
        }
        Ok(())
    }
}

// ============================================================================
// Quiz
// ============================================================================

/// Number of options every generated question must carry.
pub const QUESTION_OPTION_COUNT: usize = 4;

/// One multiple-choice question within a generated quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionArtifact {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// A generated quiz for one `quiz`-typed module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizArtifact {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionArtifact>,
}

impl Artifact for QuizArtifact {
    const KIND: &'static str = "quiz";

    fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "description": { "type": "string" },
                "questions": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "question": { "type": "string" },
                            "options": {
                                "type": "array",
                                "items": { "type": "string" },
                                "minItems": QUESTION_OPTION_COUNT,
                                "maxItems": QUESTION_OPTION_COUNT
                            },
                            "correctAnswer": { "type": "string", "description": "Must be one of the options" },
                            "explanation": { "type": "string" }
                        },
                        "required": ["question", "options", "correctAnswer", "explanation"]
                    }
                }
            },
            "required": ["title", "description", "questions"]
        })
    }

    fn validate(&self) -> Result<()> {
        require_non_empty(Self::KIND, "title", &self.title)?;
        if self.questions.is_empty() {
            return Err(DishaError::generation_failed("quiz: 'questions' is empty"));
        }
        for question in &self.questions {
            require_non_empty(Self::KIND, "question", &question.question)?;
            require_non_empty(Self::KIND, "explanation", &question.explanation)?;
            if question.options.len() != QUESTION_OPTION_COUNT {
                return Err(DishaError::generation_failed(format!(
                    "quiz: question '{}' has {} options, expected {}",
                    question.question,
                    question.options.len(),
                    QUESTION_OPTION_COUNT
                )));
            }
            if !question.options.contains(&question.correct_answer) {
                return Err(DishaError::generation_failed(format!(
                    "quiz: correct answer '{}' is not among the options",
                    question.correct_answer
                )));
            }
        }
        Ok(())
    }
}
