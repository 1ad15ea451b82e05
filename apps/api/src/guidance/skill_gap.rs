//! Skill gap analysis for a move from a current role to a target role.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guidance::lenient::null_as_default;
use crate::guidance::prompts::{SKILL_GAP_PROMPT_TEMPLATE, SKILL_GAP_SYSTEM};
use crate::guidance::validation::{optional_non_negative_number, require_text};
use crate::llm_client::template::{fill_placeholders, Shape, TaskTemplate};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillGapProfile {
    pub current_role: String,
    pub target_role: String,
    pub current_skills: String,
    pub experience_years: String,
    pub education_level: String,
    pub preferred_learning_style: String,
    pub time_commitment: String,
}

impl SkillGapProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("target_role", &self.target_role)?;
        optional_non_negative_number("experience_years", &self.experience_years)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGap {
    #[serde(deserialize_with = "null_as_default")]
    pub skill: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub importance: String,
    #[serde(deserialize_with = "null_as_default")]
    pub learning_path: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub estimated_time: String,
}

pub const SKILL_GAP_TEMPLATE: TaskTemplate<SkillGapProfile> = TaskTemplate {
    name: "skill-gap",
    system: SKILL_GAP_SYSTEM,
    render: render_prompt,
    shape: Shape::Array,
    max_tokens: 2000,
};

fn render_prompt(profile: &SkillGapProfile) -> String {
    fill_placeholders(
        SKILL_GAP_PROMPT_TEMPLATE,
        &[
            ("current_role", profile.current_role.as_str()),
            ("target_role", profile.target_role.as_str()),
            ("current_skills", profile.current_skills.as_str()),
            ("experience_years", profile.experience_years.as_str()),
            ("education_level", profile.education_level.as_str()),
            ("preferred_learning_style", profile.preferred_learning_style.as_str()),
            ("time_commitment", profile.time_commitment.as_str()),
        ],
    )
}
