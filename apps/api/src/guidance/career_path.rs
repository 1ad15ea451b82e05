//! Career path recommendations from a desired role, skills and preferences.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guidance::lenient::null_as_default;
use crate::guidance::prompts::{CAREER_PATH_PROMPT_TEMPLATE, CAREER_PATH_SYSTEM};
use crate::guidance::validation::{optional_non_negative_number, require_text};
use crate::llm_client::template::{fill_placeholders, Shape, TaskTemplate};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CareerPathProfile {
    pub desired_role: String,
    pub technical_skills: String,
    pub soft_skills: String,
    pub experience_years: String,
    pub education_level: String,
    pub preferred_industry: String,
    pub preferred_location: String,
    pub work_preferences: String,
}

impl CareerPathProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("desired_role", &self.desired_role)?;
        optional_non_negative_number("experience_years", &self.experience_years)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerRecommendation {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub salary_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub growth_potential: String,
    #[serde(deserialize_with = "null_as_default")]
    pub why_recommended: String,
}

pub const CAREER_PATH_TEMPLATE: TaskTemplate<CareerPathProfile> = TaskTemplate {
    name: "career-path",
    system: CAREER_PATH_SYSTEM,
    render: render_prompt,
    shape: Shape::Array,
    max_tokens: 2000,
};

fn render_prompt(profile: &CareerPathProfile) -> String {
    fill_placeholders(
        CAREER_PATH_PROMPT_TEMPLATE,
        &[
            ("desired_role", profile.desired_role.as_str()),
            ("technical_skills", profile.technical_skills.as_str()),
            ("soft_skills", profile.soft_skills.as_str()),
            ("experience_years", profile.experience_years.as_str()),
            ("education_level", profile.education_level.as_str()),
            ("preferred_industry", profile.preferred_industry.as_str()),
            ("preferred_location", profile.preferred_location.as_str()),
            ("work_preferences", profile.work_preferences.as_str()),
        ],
    )
}
