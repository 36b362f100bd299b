//! Quiz Service
//!
//! Lazily generates the quiz for a `quiz`-typed module the first time it is
//! opened. Unlike course content there is no fallback quiz: a generation
//! failure surfaces to the caller, because an empty curriculum is worse
//! than no quiz.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use disha_core::artifact::QuizArtifact;
use disha_core::catalog::{Module, ModuleType, Question, Quiz, QuizRepository};
use disha_core::error::Result;
use disha_core::generation::{GenerationClient, generate_artifact};
use disha_core::lock::GenerationLockRegistry;
use disha_core::prompt::quiz_prompt;

/// Why a quiz-generation run did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSkipReason {
    /// The module is not a quiz module
    NotQuizModule,
    /// The module already has a quiz; re-invocation is a no-op
    QuizExists,
    /// Another generation for this module is already in flight
    GenerationInFlight,
}

/// Result of one quiz-generation run.
#[derive(Debug, Clone)]
pub enum QuizOutcome {
    Generated {
        quiz: Quiz,
        questions: Vec<Question>,
    },
    Skipped(QuizSkipReason),
}

/// Service orchestrating quiz generation and persistence.
pub struct QuizService {
    client: Arc<dyn GenerationClient>,
    quizzes: Arc<dyn QuizRepository>,
    locks: Arc<GenerationLockRegistry>,
}

impl QuizService {
    pub fn new(
        client: Arc<dyn GenerationClient>,
        quizzes: Arc<dyn QuizRepository>,
        locks: Arc<GenerationLockRegistry>,
    ) -> Self {
        Self {
            client,
            quizzes,
            locks,
        }
    }

    /// Generates and persists the quiz for one module.
    ///
    /// Preconditions checked here: the module is `quiz`-typed, has no quiz
    /// yet, and no generation for it is in flight. The quiz and its
    /// questions are written as one atomic batch, with `order` equal to
    /// each question's generation index.
    ///
    /// # Errors
    ///
    /// `GenerationFailed` and `MissingCredential` surface unchanged; there
    /// is no fallback content for quizzes.
    pub async fn generate_quiz(&self, module: &Module, course_title: &str) -> Result<QuizOutcome> {
        if module.module_type != ModuleType::Quiz {
            return Ok(QuizOutcome::Skipped(QuizSkipReason::NotQuizModule));
        }
        if self.quizzes.find_by_module(&module.id).await?.is_some() {
            return Ok(QuizOutcome::Skipped(QuizSkipReason::QuizExists));
        }
        let Some(_guard) = self.locks.try_acquire(format!("module:{}", module.id)) else {
            return Ok(QuizOutcome::Skipped(QuizSkipReason::GenerationInFlight));
        };

        let prompt = quiz_prompt(&module.title, course_title);
        let artifact = generate_artifact::<QuizArtifact>(self.client.as_ref(), prompt).await?;

        let quiz = Quiz {
            id: Uuid::new_v4().to_string(),
            module_id: module.id.clone(),
            title: artifact.title,
            description: artifact.description,
        };
        let questions: Vec<Question> = artifact
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, question)| Question {
                id: Uuid::new_v4().to_string(),
                quiz_id: quiz.id.clone(),
                question: question.question,
                options: question.options,
                correct_answer: question.correct_answer,
                explanation: question.explanation,
                order: index as u32,
            })
            .collect();

        self.quizzes.insert_with_questions(&quiz, &questions).await?;
        info!(module_id = %module.id, questions = questions.len(), "quiz persisted");

        Ok(QuizOutcome::Generated { quiz, questions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disha_core::error::DishaError;
    use disha_core::generation::GenerationRequest;
    use disha_infrastructure::InMemoryStore;
    use serde_json::{Value, json};
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

    fn quiz_module() -> Module {
        Module {
            id: "m1".to_string(),
            title: "Checkpoint".to_string(),
            description: "Knowledge check.".to_string(),
            duration: "30 mins".to_string(),
            module_type: ModuleType::Quiz,
            content: "Covers navigation and state.".to_string(),
            order: 3,
        }
    }

    fn generated_quiz(question_count: usize) -> Value {
        let questions: Vec<Value> = (0..question_count)
            .map(|i| {
                json!({
                    "question": format!("Question {i}?"),
                    "options": ["A", "B", "C", "D"],
                    "correctAnswer": "B",
                    "explanation": "B is correct."
                })
            })
            .collect();
        json!({
            "title": "Checkpoint Quiz",
            "description": "Validates the module.",
            "questions": questions
        })
    }

    fn service(client: MockGenerationClient, store: Arc<InMemoryStore>) -> QuizService {
        QuizService::new(
            Arc::new(client),
            store,
            Arc::new(GenerationLockRegistry::new()),
        )
    }

    #[tokio::test]
    async fn test_generated_quiz_persists_ordered_questions() {
        let store = Arc::new(InMemoryStore::new());
        let service = service(
            MockGenerationClient::returning(Ok(generated_quiz(5))),
            store.clone(),
        );

        let outcome = service
            .generate_quiz(&quiz_module(), "Advanced React Native")
            .await
            .unwrap();
        let QuizOutcome::Generated { quiz, questions } = outcome else {
            panic!("expected generated outcome");
        };

        assert_eq!(questions.len(), 5);
        let orders: Vec<u32> = questions.iter().map(|q| q.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4]);
        assert!(questions.iter().all(|q| q.options.len() == 4));
        assert!(questions.iter().all(|q| q.options.contains(&q.correct_answer)));

        let persisted = store.find_by_module("m1").await.unwrap().unwrap();
        assert_eq!(persisted.id, quiz.id);
        assert_eq!(store.list_questions(&quiz.id).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_generation_failure_surfaces_without_fallback() {
        let store = Arc::new(InMemoryStore::new());
        let service = service(
            MockGenerationClient::returning(Err(DishaError::generation_failed("timeout"))),
            store.clone(),
        );

        let err = service
            .generate_quiz(&quiz_module(), "Advanced React Native")
            .await
            .unwrap_err();
        assert!(err.is_generation_failure());
        // No silent fallback quiz was written
        assert!(store.find_by_module("m1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_existing_quiz_is_noop() {
        let store = Arc::new(InMemoryStore::new());
        let service = service(
            MockGenerationClient::returning(Ok(generated_quiz(5))),
            store.clone(),
        );

        let first = service
            .generate_quiz(&quiz_module(), "Advanced React Native")
            .await
            .unwrap();
        assert!(matches!(first, QuizOutcome::Generated { .. }));

        let second = service
            .generate_quiz(&quiz_module(), "Advanced React Native")
            .await
            .unwrap();
        assert!(matches!(
            second,
            QuizOutcome::Skipped(QuizSkipReason::QuizExists)
        ));

        let quiz = store.find_by_module("m1").await.unwrap().unwrap();
        assert_eq!(store.list_questions(&quiz.id).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_non_quiz_module_is_skipped() {
        let store = Arc::new(InMemoryStore::new());
        let service = service(
            MockGenerationClient::returning(Ok(generated_quiz(5))),
            store,
        );

        let mut module = quiz_module();
        module.module_type = ModuleType::Video;
        let outcome = service
            .generate_quiz(&module, "Advanced React Native")
            .await
            .unwrap();
        assert!(matches!(
            outcome,
            QuizOutcome::Skipped(QuizSkipReason::NotQuizModule)
        ));
    }

    #[tokio::test]
    async fn test_in_flight_generation_is_suppressed() {
        let store = Arc::new(InMemoryStore::new());
        let locks = Arc::new(GenerationLockRegistry::new());
        let service = QuizService::new(
            Arc::new(MockGenerationClient::returning(Ok(generated_quiz(5)))),
            store.clone(),
            locks.clone(),
        );

        let _held = locks.try_acquire("module:m1").unwrap();
        let outcome = service
            .generate_quiz(&quiz_module(), "Advanced React Native")
            .await
            .unwrap();
        assert!(matches!(
            outcome,
            QuizOutcome::Skipped(QuizSkipReason::GenerationInFlight)
        ));
        assert!(store.find_by_module("m1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_option_count_surfaces_as_generation_failure() {
        let mut raw = generated_quiz(5);
        raw["questions"][2]["options"] = json!(["A", "B", "C"]);
        let store = Arc::new(InMemoryStore::new());
        let service = service(MockGenerationClient::returning(Ok(raw)), store.clone());

        let err = service
            .generate_quiz(&quiz_module(), "Advanced React Native")
            .await
            .unwrap_err();
        assert!(err.is_generation_failure());
        assert!(store.find_by_module("m1").await.unwrap().is_none());
    }
}
