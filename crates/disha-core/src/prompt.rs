//! Prompt builder.
//!
//! Deterministically renders generation instructions from a profile or
//! course context. Pure functions with no failure modes: absent or empty
//! profile fields degrade to literal placeholders, never to errors.

use crate::profile::Profile;

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

fn opt_or<'a>(value: Option<&'a String>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder,
    }
}

fn json_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Builds the learning-path generation instruction for a user profile.
///
/// Asks for 5-7 vocational courses aligned to the NSQF framework, with a
/// constrained category vocabulary and duration format.
pub fn learning_path_prompt(profile: &Profile) -> String {
    format!(
        "Generate a personalized learning path of 5-7 vocational and skill-based courses \
for a user with the following profile.
The goal is to help them achieve their career aspirations and improve employability \
in the Indian job market.

User Profile:
- Name: {name}
- Education: {education} (Major: {major})
- Career Goal: {goal}
- Key Skills: {skills}
- Preferred Job Roles: {roles}
- Location: {district}, {state}

Ensure the courses are aligned with NSQF (National Skills Qualifications Framework) \
levels where applicable.
Include a mix of technical (hard) skills and soft skills.
For 'category', use broad terms like \"IT\", \"Healthcare\", \"Construction\", \
\"Automotive\", \"Retail\", \"Soft Skills\", etc.
For 'level', estimate the NSQF level (e.g., Level 3, 4, 5, 6).
For 'duration', provide realistic estimates (e.g., \"3 Months\", \"6 Weeks\").",
        name = or_placeholder(&profile.full_name, "User"),
        education = or_placeholder(&profile.education_level, "Unknown"),
        major = opt_or(profile.major.as_ref(), "N/A"),
        goal = or_placeholder(&profile.career_goal, "General Employment"),
        skills = json_list(&profile.skills),
        roles = json_list(&profile.preferred_job_roles),
        district = opt_or(profile.district.as_ref(), "India"),
        state = opt_or(profile.state.as_ref(), ""),
    )
}

/// Builds the curriculum generation instruction for one course.
///
/// Asks for 5-8 modules with a mixed type distribution and per-type content
/// rules: video content is a short summary that enrichment later replaces
/// with a real reference, article content is standalone instructional text,
/// quiz and assignment content is a short descriptive placeholder.
pub fn course_content_prompt(course_title: &str, profile: Option<&Profile>) -> String {
    let background = profile
        .map(|p| or_placeholder(&p.education_level, "General Education"))
        .unwrap_or("General Education");

    format!(
        "Generate a detailed curriculum (modules/lessons) for the vocational course \
titled \"{course_title}\".
The user has a background in {background}.

Create 5-8 modules. For each module, provide:
- Title
- Description (2-3 sentences)
- Duration (est.)
- Type (video, quiz, article, assignment) - Mix these up.
- Content, depending on the type:
  - video: a 1-2 sentence summary of the lesson (it will be replaced by a real \
video reference later)
  - article: the full instructional text, at least 150 words
  - quiz or assignment: a short description of what will be tested or practiced"
    )
}

/// Builds the quiz generation instruction for one module.
///
/// Asks for exactly 5 questions, each with exactly 4 options, a correct
/// answer drawn from those options, and an explanation.
pub fn quiz_prompt(module_title: &str, course_title: &str) -> String {
    format!(
        "Generate a quiz for the module \"{module_title}\" of the vocational course \
\"{course_title}\".

Create exactly 5 multiple-choice questions. For each question, provide:
- The question text
- Exactly 4 answer options
- The correct answer, which must be one of the 4 options verbatim
- A 1-2 sentence explanation of why that answer is correct

Also provide a short quiz title and description."
    )
}
