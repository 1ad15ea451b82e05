//! Interview preparation guide for a role at a company.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guidance::lenient::null_as_default;
use crate::guidance::prompts::{INTERVIEW_PREP_PROMPT_TEMPLATE, INTERVIEW_PREP_SYSTEM};
use crate::guidance::validation::{optional_non_negative_number, require_text};
use crate::llm_client::template::{fill_placeholders, Shape, TaskTemplate};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InterviewProfile {
    pub role: String,
    pub company: String,
    pub experience_years: String,
    pub education_level: String,
    pub technical_skills: String,
    pub previous_interviews: String,
}

impl InterviewProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("role", &self.role)?;
        optional_non_negative_number("experience_years", &self.experience_years)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonQuestion {
    #[serde(deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tips: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sample_answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalQuestion {
    #[serde(deserialize_with = "null_as_default")]
    pub question: String,
    /// Easy / Medium / Hard
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub explanation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sample_answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehavioralQuestion {
    #[serde(deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "null_as_default")]
    pub what_they_look_for: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sample_answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewPrep {
    #[serde(deserialize_with = "null_as_default")]
    pub common_questions: Vec<CommonQuestion>,
    #[serde(deserialize_with = "null_as_default")]
    pub technical_questions: Vec<TechnicalQuestion>,
    #[serde(deserialize_with = "null_as_default")]
    pub behavioral_questions: Vec<BehavioralQuestion>,
    #[serde(deserialize_with = "null_as_default")]
    pub interview_tips: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub preparation_checklist: Vec<String>,
}

pub const INTERVIEW_PREP_TEMPLATE: TaskTemplate<InterviewProfile> = TaskTemplate {
    name: "interview-coach",
    system: INTERVIEW_PREP_SYSTEM,
    render: render_prompt,
    shape: Shape::Object,
    max_tokens: 2000,
};

fn render_prompt(profile: &InterviewProfile) -> String {
    fill_placeholders(
        INTERVIEW_PREP_PROMPT_TEMPLATE,
        &[
            ("role", profile.role.as_str()),
            ("company", profile.company.as_str()),
            ("experience_years", profile.experience_years.as_str()),
            ("education_level", profile.education_level.as_str()),
            ("technical_skills", profile.technical_skills.as_str()),
            ("previous_interviews", profile.previous_interviews.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_expects_object() {
        assert_eq!(INTERVIEW_PREP_TEMPLATE.shape, Shape::Object);
        assert!(INTERVIEW_PREP_SYSTEM.contains("JSON object"));
    }

    #[test]
    fn test_prompt_mentions_company() {
        let profile = InterviewProfile {
            role: "Backend Engineer".to_string(),
            company: "Initech".to_string(),
            ..Default::default()
        };
        let prompt = INTERVIEW_PREP_TEMPLATE.user_prompt(&profile);
        assert!(prompt.contains("Company: Initech"));
        assert!(prompt.contains("\"behavioral_questions\""));
    }

    #[test]
    fn test_validate_allows_blank_experience() {
        let profile = InterviewProfile {
            role: "Pharmacist".to_string(),
            ..Default::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_partial_prep_deserializes() {
        let prep: InterviewPrep = serde_json::from_str(
            r#"{
                "technical_questions": [
                    {"question": "What is a mutex?", "difficulty": "Medium"}
                ],
                "interview_tips": ["Ask questions at the end"]
            }"#,
        )
        .unwrap();
        assert!(prep.common_questions.is_empty());
        assert_eq!(prep.technical_questions[0].difficulty, "Medium");
        assert_eq!(prep.interview_tips.len(), 1);
    }
}
