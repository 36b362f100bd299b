//! User profile domain model.
//!
//! Represents the onboarding questionnaire answers: identity, education,
//! socio-economic context, and career aspirations. Owned by exactly one
//! user account.

use serde::{Deserialize, Serialize};

/// A user's onboarding profile.
///
/// Optional fields were skippable onboarding steps; the prompt builder
/// substitutes placeholders for anything absent, so an incomplete profile
/// never blocks generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Last completed onboarding step
    #[serde(default)]
    pub onboarding_step: u32,

    // Step 1: Personal
    pub full_name: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,

    // Step 2: Education
    /// e.g. "10th", "12th", "Graduate"
    pub education_level: String,
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub passing_year: Option<String>,
    /// Stream or branch
    #[serde(default)]
    pub major: Option<String>,

    // Step 3: Socio-economic
    #[serde(default)]
    pub annual_family_income: Option<String>,
    /// General, SC/ST, OBC
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,

    // Step 4: Aspirations
    /// "Job", "Higher Studies", "Business"
    pub career_goal: String,
    #[serde(default)]
    pub preferred_job_roles: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}
