//! Course Content Service
//!
//! Generates a course's curriculum, enriches video modules with real
//! references, and persists the module list as one update. Guarded so a
//! course is generated at most once and never left without modules after a
//! generation attempt.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};
use uuid::Uuid;

use disha_core::artifact::{CourseContentArtifact, ModuleArtifact};
use disha_core::catalog::{CourseRepository, Module, ModuleType, fallback_curriculum};
use disha_core::error::{DishaError, Result};
use disha_core::generation::{GenerationClient, generate_artifact};
use disha_core::lock::GenerationLockRegistry;
use disha_core::profile::Profile;
use disha_core::prompt::course_content_prompt;
use disha_core::video::VideoLookup;

/// Why a course-content run did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseContentSkipReason {
    /// The course already has a curriculum; re-invocation is a no-op
    ModulesExist,
    /// Another generation for this course is already in flight
    GenerationInFlight,
}

/// Result of one course-content generation run.
#[derive(Debug, Clone)]
pub enum CourseContentOutcome {
    /// Validated AI curriculum, enriched and persisted
    Generated { modules: Vec<Module> },
    /// The fixed two-module curriculum persisted after a generation failure
    Fallback { modules: Vec<Module> },
    /// Nothing was generated or written
    Skipped(CourseContentSkipReason),
}

/// Service orchestrating curriculum generation, enrichment, and persistence.
pub struct CourseContentService {
    client: Arc<dyn GenerationClient>,
    lookup: Arc<dyn VideoLookup>,
    courses: Arc<dyn CourseRepository>,
    locks: Arc<GenerationLockRegistry>,
}

impl CourseContentService {
    pub fn new(
        client: Arc<dyn GenerationClient>,
        lookup: Arc<dyn VideoLookup>,
        courses: Arc<dyn CourseRepository>,
        locks: Arc<GenerationLockRegistry>,
    ) -> Self {
        Self {
            client,
            lookup,
            courses,
            locks,
        }
    }

    /// Generates and persists the curriculum for one course.
    ///
    /// Preconditions checked here, not by the caller: the course exists,
    /// has no modules yet, and no generation for it is in flight. On
    /// `GenerationFailed` the fixed fallback curriculum is persisted
    /// instead, so the course never ends up permanently without modules.
    pub async fn generate_course_content(
        &self,
        course_id: &str,
        profile: Option<&Profile>,
    ) -> Result<CourseContentOutcome> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| DishaError::not_found("course", course_id))?;

        if course.modules.is_some() {
            return Ok(CourseContentOutcome::Skipped(
                CourseContentSkipReason::ModulesExist,
            ));
        }
        let Some(_guard) = self.locks.try_acquire(format!("course:{course_id}")) else {
            return Ok(CourseContentOutcome::Skipped(
                CourseContentSkipReason::GenerationInFlight,
            ));
        };

        let prompt = course_content_prompt(&course.title, profile);
        match generate_artifact::<CourseContentArtifact>(self.client.as_ref(), prompt).await {
            Ok(artifact) => {
                let modules = self.enrich_modules(artifact.modules).await;
                self.courses.set_modules(course_id, &modules).await?;
                info!(course_id, count = modules.len(), "curriculum persisted");
                Ok(CourseContentOutcome::Generated { modules })
            }
            Err(err) if err.is_generation_failure() => {
                warn!(course_id, error = %err, "curriculum generation degraded to fixed fallback");
                let modules = materialize_modules(fallback_curriculum());
                self.courses.set_modules(course_id, &modules).await?;
                Ok(CourseContentOutcome::Fallback { modules })
            }
            Err(err) => Err(err),
        }
    }

    /// Resolves video references for every `video` module concurrently.
    ///
    /// `join_all` keeps results aligned with the input sequence, so the
    /// persisted order always equals generation order regardless of which
    /// lookup finishes first. A failed or empty lookup keeps the generated
    /// placeholder content.
    async fn enrich_modules(&self, artifacts: Vec<ModuleArtifact>) -> Vec<Module> {
        let lookups = artifacts.iter().map(|artifact| async move {
            if artifact.module_type != ModuleType::Video {
                return None;
            }
            match self.lookup.find_video(&artifact.title).await {
                Ok(Some(reference)) => Some(reference.url),
                Ok(None) => None,
                Err(err) => {
                    debug!(title = %artifact.title, error = %err, "video lookup unavailable, keeping generated content");
                    None
                }
            }
        });
        let resolved = join_all(lookups).await;

        artifacts
            .into_iter()
            .zip(resolved)
            .enumerate()
            .map(|(index, (artifact, url))| {
                let mut module = module_from_artifact(artifact, index as u32);
                if let Some(url) = url {
                    module.content = url;
                }
                module
            })
            .collect()
    }
}

fn module_from_artifact(artifact: ModuleArtifact, order: u32) -> Module {
    Module {
        id: Uuid::new_v4().to_string(),
        title: artifact.title,
        description: artifact.description,
        duration: artifact.duration,
        module_type: artifact.module_type,
        content: artifact.content,
        order,
    }
}

fn materialize_modules(artifacts: Vec<ModuleArtifact>) -> Vec<Module> {
    artifacts
        .into_iter()
        .enumerate()
        .map(|(index, artifact)| module_from_artifact(artifact, index as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use disha_core::catalog::RecommendedCourse;
    use disha_core::generation::GenerationRequest;
    use disha_core::video::VideoReference;
    use disha_infrastructure::InMemoryStore;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockGenerationClient {
        response: Mutex<Option<Result<Value>>>,
    }

    impl MockGenerationClient {
        fn returning(response: Result<Value>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
            }
        }
    }

    #[async_trait::async_trait]
    impl GenerationClient for MockGenerationClient {
        async fn generate(&self, _request: &GenerationRequest) -> Result<Value> {
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(DishaError::generation_failed("no canned response left")))
        }
    }

    /// Lookup resolving only the queries it was seeded with.
    struct MockVideoLookup {
        by_title: HashMap<String, String>,
        fail: bool,
    }

    impl MockVideoLookup {
        fn seeded(entries: &[(&str, &str)]) -> Self {
            Self {
                by_title: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                by_title: HashMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait::async_trait]
    impl VideoLookup for MockVideoLookup {
        async fn find_video(&self, query: &str) -> Result<Option<VideoReference>> {
            if self.fail {
                return Err(DishaError::enrichment_unavailable("search quota exhausted"));
            }
            Ok(self.by_title.get(query).map(|url| VideoReference {
                title: query.to_string(),
                url: url.clone(),
            }))
        }
    }

    async fn seed_course(store: &InMemoryStore) {
        store
            .insert_batch(
                "u1",
                &[RecommendedCourse {
                    id: "c1".to_string(),
                    title: "Advanced React Native".to_string(),
                    description: "Build premium mobile apps.".to_string(),
                    category: "Mobile Dev".to_string(),
                    level: "NSQF Level 6".to_string(),
                    duration: "3 Months".to_string(),
                    rating: 4.9,
                    enrolled_count: 1500,
                    modules: None,
                }],
            )
            .await
            .unwrap();
    }

    fn generated_curriculum() -> Value {
        json!({
            "modules": [
                {
                    "title": "Navigation Deep Dive",
                    "description": "Stack and tab navigation patterns.",
                    "duration": "1 Hour",
                    "type": "video",
                    "content": "Overview of navigation APIs."
                },
                {
                    "title": "State Management",
                    "description": "Stores, reducers, reactivity.",
                    "duration": "2 Hours",
                    "type": "article",
                    "content": "Long-form instructional text about state."
                },
                {
                    "title": "Animations",
                    "description": "Gesture-driven animation.",
                    "duration": "1 Hour",
                    "type": "video",
                    "content": "Overview of the animation stack."
                },
                {
                    "title": "Checkpoint",
                    "description": "Knowledge check.",
                    "duration": "30 mins",
                    "type": "quiz",
                    "content": "Covers navigation and state."
                }
            ]
        })
    }

    fn service(
        client: MockGenerationClient,
        lookup: MockVideoLookup,
        store: Arc<InMemoryStore>,
    ) -> CourseContentService {
        CourseContentService::new(
            Arc::new(client),
            Arc::new(lookup),
            store,
            Arc::new(GenerationLockRegistry::new()),
        )
    }

    #[tokio::test]
    async fn test_generated_curriculum_is_enriched_and_ordered() {
        let store = Arc::new(InMemoryStore::new());
        seed_course(&store).await;
        let service = service(
            MockGenerationClient::returning(Ok(generated_curriculum())),
            MockVideoLookup::seeded(&[(
                "Navigation Deep Dive",
                "https://www.youtube.com/watch?v=nav123",
            )]),
            store.clone(),
        );

        let outcome = service
            .generate_course_content("c1", None)
            .await
            .unwrap();
        let CourseContentOutcome::Generated { modules } = outcome else {
            panic!("expected generated outcome");
        };

        assert_eq!(modules.len(), 4);
        let orders: Vec<u32> = modules.iter().map(|m| m.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);

        // First video resolved; second video had no match and keeps its
        // generated summary
        assert_eq!(modules[0].content, "https://www.youtube.com/watch?v=nav123");
        assert_eq!(modules[2].content, "Overview of the animation stack.");
        // Non-video content untouched
        assert_eq!(modules[1].content, "Long-form instructional text about state.");

        let persisted = store.find_by_id("c1").await.unwrap().unwrap();
        assert_eq!(persisted.modules.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_absorbed() {
        let store = Arc::new(InMemoryStore::new());
        seed_course(&store).await;
        let service = service(
            MockGenerationClient::returning(Ok(generated_curriculum())),
            MockVideoLookup::failing(),
            store.clone(),
        );

        let outcome = service.generate_course_content("c1", None).await.unwrap();
        let CourseContentOutcome::Generated { modules } = outcome else {
            panic!("expected generated outcome despite lookup failure");
        };
        assert_eq!(modules[0].content, "Overview of navigation APIs.");
    }

    #[tokio::test]
    async fn test_generation_failure_persists_fixed_fallback() {
        let store = Arc::new(InMemoryStore::new());
        seed_course(&store).await;
        let service = service(
            MockGenerationClient::returning(Err(DishaError::generation_failed("timeout"))),
            MockVideoLookup::seeded(&[]),
            store.clone(),
        );

        let outcome = service.generate_course_content("c1", None).await.unwrap();
        let CourseContentOutcome::Fallback { modules } = outcome else {
            panic!("expected fallback outcome");
        };

        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].title, "Introduction");
        assert_eq!(modules[1].title, "Basics");

        // The course is never left without modules
        let persisted = store.find_by_id("c1").await.unwrap().unwrap();
        assert_eq!(persisted.modules.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_reinvocation_with_existing_modules_is_noop() {
        let store = Arc::new(InMemoryStore::new());
        seed_course(&store).await;
        let service = service(
            MockGenerationClient::returning(Ok(generated_curriculum())),
            MockVideoLookup::seeded(&[]),
            store.clone(),
        );

        let first = service.generate_course_content("c1", None).await.unwrap();
        assert!(matches!(first, CourseContentOutcome::Generated { .. }));
        let before = store.find_by_id("c1").await.unwrap().unwrap().modules.unwrap();

        let second = service.generate_course_content("c1", None).await.unwrap();
        assert!(matches!(
            second,
            CourseContentOutcome::Skipped(CourseContentSkipReason::ModulesExist)
        ));

        let after = store.find_by_id("c1").await.unwrap().unwrap().modules.unwrap();
        let before_ids: Vec<&str> = before.iter().map(|m| m.id.as_str()).collect();
        let after_ids: Vec<&str> = after.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(before_ids, after_ids);
    }

    #[tokio::test]
    async fn test_in_flight_generation_is_suppressed() {
        let store = Arc::new(InMemoryStore::new());
        seed_course(&store).await;
        let locks = Arc::new(GenerationLockRegistry::new());
        let service = CourseContentService::new(
            Arc::new(MockGenerationClient::returning(Ok(generated_curriculum()))),
            Arc::new(MockVideoLookup::seeded(&[])),
            store.clone(),
            locks.clone(),
        );

        let _held = locks.try_acquire("course:c1").unwrap();
        let outcome = service.generate_course_content("c1", None).await.unwrap();
        assert!(matches!(
            outcome,
            CourseContentOutcome::Skipped(CourseContentSkipReason::GenerationInFlight)
        ));
        assert!(store.find_by_id("c1").await.unwrap().unwrap().modules.is_none());
    }

    #[tokio::test]
    async fn test_unknown_course_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let service = service(
            MockGenerationClient::returning(Ok(generated_curriculum())),
            MockVideoLookup::seeded(&[]),
            store,
        );

        let err = service.generate_course_content("ghost", None).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
