//! Learning Path Service
//!
//! Turns a user profile into a persisted list of recommended courses.
//! Generation failures and absent profiles degrade silently to the static
//! fallback list; only persistence failures surface to the caller.

use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use disha_core::artifact::{CourseArtifact, LearningPathArtifact};
use disha_core::catalog::{CourseRepository, RecommendedCourse, fallback_courses};
use disha_core::error::Result;
use disha_core::generation::{GenerationClient, generate_artifact};
use disha_core::profile::Profile;
use disha_core::prompt::learning_path_prompt;

/// Where the persisted content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Validated AI output
    Generated,
    /// Static hand-authored content substituted after a generation failure
    /// or in the absence of a profile
    Fallback,
}

/// Result of one learning-path generation run.
#[derive(Debug, Clone)]
pub struct LearningPathOutcome {
    pub courses: Vec<RecommendedCourse>,
    pub source: ContentSource,
}

/// Service orchestrating learning-path generation and persistence.
pub struct LearningPathService {
    client: Arc<dyn GenerationClient>,
    courses: Arc<dyn CourseRepository>,
}

impl LearningPathService {
    pub fn new(client: Arc<dyn GenerationClient>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { client, courses }
    }

    /// Generates and persists a recommended-course list for a user.
    ///
    /// With no profile on record the generation call is skipped entirely
    /// and the static list is used. A `GenerationFailed` or
    /// `MissingCredential` from the client degrades to the same list and
    /// is logged, not surfaced. The batch write is atomic: on
    /// `PersistenceFailed` no course is visible as newly added.
    pub async fn generate_learning_path(
        &self,
        profile: Option<&Profile>,
        user_id: &str,
    ) -> Result<LearningPathOutcome> {
        let (artifacts, source) = match profile {
            None => {
                info!(user_id, "no profile on record, using static learning path");
                (fallback_courses(), ContentSource::Fallback)
            }
            Some(profile) => {
                let prompt = learning_path_prompt(profile);
                match generate_artifact::<LearningPathArtifact>(self.client.as_ref(), prompt).await
                {
                    Ok(artifact) => (artifact.courses, ContentSource::Generated),
                    Err(err) if err.is_generation_failure() => {
                        warn!(user_id, error = %err, "learning path generation degraded to static fallback");
                        (fallback_courses(), ContentSource::Fallback)
                    }
                    Err(err) => return Err(err),
                }
            }
        };

        let courses: Vec<RecommendedCourse> = artifacts.into_iter().map(materialize_course).collect();

        self.courses.insert_batch(user_id, &courses).await?;
        info!(user_id, count = courses.len(), "recommended courses persisted");

        Ok(LearningPathOutcome { courses, source })
    }
}

/// Assigns an id and fills display defaults: rating 4.5 and a pseudo-random
/// enrolled count when the artifact does not carry authored values.
fn materialize_course(artifact: CourseArtifact) -> RecommendedCourse {
    RecommendedCourse {
        id: Uuid::new_v4().to_string(),
        title: artifact.title,
        description: artifact.description,
        category: artifact.category,
        level: artifact.level,
        duration: artifact.duration,
        rating: artifact.rating.unwrap_or(4.5),
        enrolled_count: artifact
            .enrolled_count
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..1000)),
        modules: None,
    }
}
