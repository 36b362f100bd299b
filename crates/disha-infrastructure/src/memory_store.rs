//! In-memory store implementation.
//!
//! Backs every repository trait with a single mutex-guarded state map.
//! Batch operations validate everything upfront and only then mutate, so a
//! rejected batch leaves no partial state. Enrollment uniqueness is
//! enforced here, at the persistence boundary.

use std::collections::HashMap;
use std::sync::Mutex;

use disha_core::catalog::{CourseRepository, Module, Question, Quiz, QuizRepository, RecommendedCourse};
use disha_core::enrollment::{Enrollment, EnrollmentRepository};
use disha_core::error::{DishaError, Result};
use disha_core::profile::{Profile, ProfileRepository};

#[derive(Default)]
struct StoreState {
    /// user id -> profile
    profiles: HashMap<String, Profile>,
    /// course id -> course
    courses: HashMap<String, RecommendedCourse>,
    /// user id -> owned course ids, in insertion order
    user_courses: HashMap<String, Vec<String>>,
    /// quiz id -> quiz
    quizzes: HashMap<String, Quiz>,
    /// module id -> quiz id
    module_quiz: HashMap<String, String>,
    /// quiz id -> questions
    questions: HashMap<String, Vec<Question>>,
    /// (user id, course id) -> enrollment
    enrollments: HashMap<(String, String), Enrollment>,
}

/// Shared in-memory store.
///
/// Cheap to clone via `Arc`; safe for concurrent use from multiple tasks.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProfileRepository for InMemoryStore {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Profile>> {
        let state = self.state.lock().unwrap();
        Ok(state.profiles.get(user_id).cloned())
    }

    async fn save(&self, user_id: &str, profile: &Profile) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.profiles.insert(user_id.to_string(), profile.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl CourseRepository for InMemoryStore {
    async fn find_by_id(&self, course_id: &str) -> Result<Option<RecommendedCourse>> {
        let state = self.state.lock().unwrap();
        Ok(state.courses.get(course_id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<RecommendedCourse>> {
        let state = self.state.lock().unwrap();
        let ids = state.user_courses.get(user_id).cloned().unwrap_or_default();
        Ok(ids
            .iter()
            .filter_map(|id| state.courses.get(id).cloned())
            .collect())
    }

    async fn insert_batch(&self, user_id: &str, courses: &[RecommendedCourse]) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        // Validate the whole batch before touching anything
        for course in courses {
            if course.id.is_empty() {
                return Err(DishaError::persistence_failed(
                    "course batch rejected: empty id",
                ));
            }
            if state.courses.contains_key(&course.id) {
                return Err(DishaError::persistence_failed(format!(
                    "course batch rejected: id '{}' already exists",
                    course.id
                )));
            }
        }

        let owned = state.user_courses.entry(user_id.to_string()).or_default();
        let mut ids: Vec<String> = courses.iter().map(|c| c.id.clone()).collect();
        owned.append(&mut ids);
        for course in courses {
            state.courses.insert(course.id.clone(), course.clone());
        }
        Ok(())
    }

    async fn set_modules(&self, course_id: &str, modules: &[Module]) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        let mut orders: Vec<u32> = modules.iter().map(|m| m.order).collect();
        orders.sort_unstable();
        orders.dedup();
        if orders.len() != modules.len() {
            return Err(DishaError::persistence_failed(
                "module batch rejected: duplicate order indices",
            ));
        }

        let course = state
            .courses
            .get_mut(course_id)
            .ok_or_else(|| DishaError::not_found("course", course_id))?;
        course.modules = Some(modules.to_vec());
        Ok(())
    }
}

#[async_trait::async_trait]
impl QuizRepository for InMemoryStore {
    async fn find_by_module(&self, module_id: &str) -> Result<Option<Quiz>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .module_quiz
            .get(module_id)
            .and_then(|quiz_id| state.quizzes.get(quiz_id))
            .cloned())
    }

    async fn list_questions(&self, quiz_id: &str) -> Result<Vec<Question>> {
        let state = self.state.lock().unwrap();
        let mut questions = state.questions.get(quiz_id).cloned().unwrap_or_default();
        questions.sort_by_key(|q| q.order);
        Ok(questions)
    }

    async fn insert_with_questions(&self, quiz: &Quiz, questions: &[Question]) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        if state.module_quiz.contains_key(&quiz.module_id) {
            return Err(DishaError::already_exists("quiz", quiz.module_id.clone()));
        }
        if questions.iter().any(|q| q.quiz_id != quiz.id) {
            return Err(DishaError::persistence_failed(
                "question batch rejected: quiz id mismatch",
            ));
        }

        state
            .module_quiz
            .insert(quiz.module_id.clone(), quiz.id.clone());
        state.quizzes.insert(quiz.id.clone(), quiz.clone());
        state.questions.insert(quiz.id.clone(), questions.to_vec());
        Ok(())
    }
}

#[async_trait::async_trait]
impl EnrollmentRepository for InMemoryStore {
    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<Enrollment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .enrollments
            .get(&(user_id.to_string(), course_id.to_string()))
            .cloned())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Enrollment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .enrollments
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, enrollment: &Enrollment) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let key = (enrollment.user_id.clone(), enrollment.course_id.clone());
        if state.enrollments.contains_key(&key) {
            return Err(DishaError::already_exists(
                "enrollment",
                format!("{}:{}", enrollment.user_id, enrollment.course_id),
            ));
        }
        state.enrollments.insert(key, enrollment.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use disha_core::catalog::ModuleType;
    use disha_core::enrollment::EnrollmentStatus;

    fn course(id: &str, title: &str) -> RecommendedCourse {
        RecommendedCourse {
            id: id.to_string(),
            title: title.to_string(),
            description: "desc".to_string(),
            category: "IT".to_string(),
            level: "NSQF Level 5".to_string(),
            duration: "2 Months".to_string(),
            rating: 4.5,
            enrolled_count: 100,
            modules: None,
        }
    }

    fn module(id: &str, order: u32) -> Module {
        Module {
            id: id.to_string(),
            title: format!("Module {order}"),
            description: "desc".to_string(),
            duration: "1 Hour".to_string(),
            module_type: ModuleType::Article,
            content: "text".to_string(),
            order,
        }
    }

    #[tokio::test]
    async fn test_insert_batch_links_user() {
        let store = InMemoryStore::new();
        store
            .insert_batch("u1", &[course("c1", "A"), course("c2", "B")])
            .await
            .unwrap();

        let listed = store.list_for_user("u1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(store.list_for_user("u2").await.unwrap().is_empty());
        assert!(store.find_by_id("c1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_insert_batch_is_all_or_nothing() {
        let store = InMemoryStore::new();
        store.insert_batch("u1", &[course("c1", "A")]).await.unwrap();

        // Second batch collides on c1; c9 must not be persisted either
        let err = store
            .insert_batch("u1", &[course("c9", "New"), course("c1", "Dup")])
            .await
            .unwrap_err();
        assert!(err.is_persistence_failed());
        assert!(store.find_by_id("c9").await.unwrap().is_none());
        assert_eq!(store.list_for_user("u1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_modules_roundtrip_preserves_order() {
        let store = InMemoryStore::new();
        store.insert_batch("u1", &[course("c1", "A")]).await.unwrap();

        let modules = vec![module("m0", 0), module("m1", 1), module("m2", 2)];
        store.set_modules("c1", &modules).await.unwrap();

        let read = store.find_by_id("c1").await.unwrap().unwrap();
        let orders: Vec<u32> = read.modules.unwrap().iter().map(|m| m.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_set_modules_rejects_duplicate_order() {
        let store = InMemoryStore::new();
        store.insert_batch("u1", &[course("c1", "A")]).await.unwrap();

        let err = store
            .set_modules("c1", &[module("m0", 0), module("m1", 0)])
            .await
            .unwrap_err();
        assert!(err.is_persistence_failed());
        assert!(store.find_by_id("c1").await.unwrap().unwrap().modules.is_none());
    }

    #[tokio::test]
    async fn test_set_modules_unknown_course() {
        let store = InMemoryStore::new();
        let err = store.set_modules("ghost", &[module("m0", 0)]).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_quiz_insert_and_ordered_questions() {
        let store = InMemoryStore::new();
        let quiz = Quiz {
            id: "q1".to_string(),
            module_id: "m1".to_string(),
            title: "Check".to_string(),
            description: "desc".to_string(),
        };
        let questions: Vec<Question> = (0..3)
            .map(|i| Question {
                id: format!("qq{i}"),
                quiz_id: "q1".to_string(),
                question: format!("Q{i}?"),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_answer: "a".to_string(),
                explanation: "because".to_string(),
                order: i,
            })
            .rev()
            .collect();

        store.insert_with_questions(&quiz, &questions).await.unwrap();

        let read = store.list_questions("q1").await.unwrap();
        let orders: Vec<u32> = read.iter().map(|q| q.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);

        // Second quiz for the same module is rejected
        let dup = Quiz { id: "q2".to_string(), ..quiz.clone() };
        let err = store.insert_with_questions(&dup, &[]).await.unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(store.find_by_module("m1").await.unwrap().unwrap().id, "q1");
    }

    #[tokio::test]
    async fn test_enrollment_uniqueness() {
        let store = InMemoryStore::new();
        let enrollment = Enrollment {
            id: "e1".to_string(),
            user_id: "u1".to_string(),
            course_id: "c1".to_string(),
            progress: 0,
            status: EnrollmentStatus::Active,
            last_accessed: Utc::now(),
        };
        store.insert(&enrollment).await.unwrap();

        let dup = Enrollment { id: "e2".to_string(), ..enrollment.clone() };
        let err = store.insert(&dup).await.unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(store.list_by_user("u1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_profile_roundtrip() {
        let store = InMemoryStore::new();
        assert!(store.find_by_user("u1").await.unwrap().is_none());

        let profile = Profile {
            full_name: "Asha".to_string(),
            education_level: "B.Tech".to_string(),
            career_goal: "Software Engineer".to_string(),
            ..Profile::default()
        };
        store.save("u1", &profile).await.unwrap();
        let read = store.find_by_user("u1").await.unwrap().unwrap();
        assert_eq!(read.full_name, "Asha");
    }
}
