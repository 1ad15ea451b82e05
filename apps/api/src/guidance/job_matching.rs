//! Job matches scored against a candidate's skills and expectations.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guidance::lenient::{null_as_default, number_or_numeric_string};
use crate::guidance::prompts::{JOB_MATCH_PROMPT_TEMPLATE, JOB_MATCH_SYSTEM};
use crate::guidance::validation::{optional_salary_amount, require_text};
use crate::llm_client::template::{fill_placeholders, Shape, TaskTemplate};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobMatchProfile {
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub preferred_industry: String,
    pub preferred_location: String,
    pub work_preferences: String,
    pub salary_expectations: String,
}

impl JobMatchProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("skills", &self.skills)?;
        optional_salary_amount("salary_expectations", &self.salary_expectations)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobMatch {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    /// 0 – 100
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub match_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub salary_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub why_match: String,
}

pub const JOB_MATCH_TEMPLATE: TaskTemplate<JobMatchProfile> = TaskTemplate {
    name: "job-matching",
    system: JOB_MATCH_SYSTEM,
    render: render_prompt,
    shape: Shape::Array,
    max_tokens: 2000,
};

fn render_prompt(profile: &JobMatchProfile) -> String {
    fill_placeholders(
        JOB_MATCH_PROMPT_TEMPLATE,
        &[
            ("skills", profile.skills.as_str()),
            ("experience", profile.experience.as_str()),
            ("education", profile.education.as_str()),
            ("preferred_industry", profile.preferred_industry.as_str()),
            ("preferred_location", profile.preferred_location.as_str()),
            ("work_preferences", profile.work_preferences.as_str()),
            ("salary_expectations", profile.salary_expectations.as_str()),
        ],
    )
}

/// Best matches first. The model does not guarantee any order.
pub fn sort_by_score(matches: &mut [JobMatch]) {
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
}
