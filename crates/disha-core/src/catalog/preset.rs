//! Fixed fallback content.
//!
//! Hand-authored artifacts substituted when generation fails or no profile
//! exists yet. They flow through the same persistence path as generated
//! content, so a degraded run is indistinguishable downstream apart from
//! its outcome tag.

use crate::artifact::{CourseArtifact, ModuleArtifact};
use crate::catalog::ModuleType;

/// Returns the static fallback learning path: five fixed courses.
///
/// Ratings and enrolled counts are authored here, unlike AI output where
/// the orchestrator fills defaults.
pub fn fallback_courses() -> Vec<CourseArtifact> {
    vec![
        CourseArtifact {
            title: "Advanced React Native".to_string(),
            description: "Build premium mobile apps.".to_string(),
            category: "Mobile Dev".to_string(),
            level: "NSQF Level 6".to_string(),
            duration: "3 Months".to_string(),
            rating: Some(4.9),
            enrolled_count: Some(1500),
        },
        CourseArtifact {
            title: "AI for Everyone".to_string(),
            description: "Understand the basics of AI.".to_string(),
            category: "Data Science".to_string(),
            level: "NSQF Level 5".to_string(),
            duration: "2 Months".to_string(),
            rating: Some(4.7),
            enrolled_count: Some(3200),
        },
        CourseArtifact {
            title: "Modern UI/UX Design".to_string(),
            description: "Create stunning interfaces.".to_string(),
            category: "Design".to_string(),
            level: "NSQF Level 5".to_string(),
            duration: "4 Months".to_string(),
            rating: Some(4.8),
            enrolled_count: Some(950),
        },
        CourseArtifact {
            title: "Python for Finance".to_string(),
            description: "Analyze financial data.".to_string(),
            category: "Finance".to_string(),
            level: "NSQF Level 6".to_string(),
            duration: "3 Months".to_string(),
            rating: Some(4.6),
            enrolled_count: Some(700),
        },
        CourseArtifact {
            title: "Effective Communication".to_string(),
            description: "Speak with confidence.".to_string(),
            category: "Soft Skills".to_string(),
            level: "NSQF Level 4".to_string(),
            duration: "1 Month".to_string(),
            rating: Some(4.9),
            enrolled_count: Some(5000),
        },
    ]
}

/// Returns the fixed two-module fallback curriculum.
///
/// Persisted when course-content generation fails, so a course is never
/// left permanently without modules once generation has been attempted.
pub fn fallback_curriculum() -> Vec<ModuleArtifact> {
    vec![
        ModuleArtifact {
            title: "Introduction".to_string(),
            description: "Overview of the course.".to_string(),
            duration: "15 mins".to_string(),
            module_type: ModuleType::Video,
            content: "Welcome to the course.".to_string(),
        },
        ModuleArtifact {
            title: "Basics".to_string(),
            description: "Fundamental concepts.".to_string(),
            duration: "45 mins".to_string(),
            module_type: ModuleType::Article,
            content: "Read Chapter 1.".to_string(),
        },
    ]
}
