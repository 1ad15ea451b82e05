//! Multi-phase career roadmap, with extra academic detail for students.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guidance::lenient::null_as_default;
use crate::guidance::prompts::{CAREER_ROADMAP_PROMPT_TEMPLATE, CAREER_ROADMAP_SYSTEM};
use crate::guidance::validation::{optional_gpa, optional_non_negative_number, require_text};
use crate::llm_client::template::{fill_placeholders, Shape, TaskTemplate};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoadmapProfile {
    pub current_role: String,
    pub target_role: String,
    pub experience_years: String,
    pub education_level: String,
    pub current_skills: String,
    pub timeline_years: String,
    pub preferred_learning_style: String,
    pub is_student: bool,
    pub current_major: String,
    pub current_year: String,
    pub gpa: String,
    pub extracurricular_activities: String,
    pub internship_experience: String,
    pub target_industry: String,
}

impl RoadmapProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("target_role", &self.target_role)?;
        optional_non_negative_number("experience_years", &self.experience_years)?;
        optional_non_negative_number("timeline_years", &self.timeline_years)?;
        if self.is_student {
            optional_gpa(&self.gpa)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentState {
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub academic_performance: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub extracurricular_activities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetState {
    #[serde(deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub required_experience: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub required_education: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub required_certifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub industry_requirements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub estimated_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub academic_requirements: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub internship_opportunities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapPhase {
    #[serde(deserialize_with = "null_as_default")]
    pub phase: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapSkillGap {
    #[serde(deserialize_with = "null_as_default")]
    pub skill: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub learning_path: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub academic_courses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub online_courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkingStrategy {
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub communities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub mentorship_opportunities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub student_organizations: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub academic_networks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessMetrics {
    #[serde(deserialize_with = "null_as_default")]
    pub short_term: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub medium_term: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub long_term: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub academic_goals: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub career_goals: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerRoadmap {
    #[serde(deserialize_with = "null_as_default")]
    pub current_state: CurrentState,
    #[serde(deserialize_with = "null_as_default")]
    pub target_state: TargetState,
    #[serde(deserialize_with = "null_as_default")]
    pub timeline: Vec<RoadmapPhase>,
    #[serde(deserialize_with = "null_as_default")]
    pub skill_gaps: Vec<RoadmapSkillGap>,
    #[serde(deserialize_with = "null_as_default")]
    pub networking_strategy: NetworkingStrategy,
    #[serde(deserialize_with = "null_as_default")]
    pub success_metrics: SuccessMetrics,
}

impl CareerRoadmap {
    /// Total number of milestones across all phases.
    pub fn milestone_count(&self) -> usize {
        self.timeline.iter().map(|p| p.milestones.len()).sum()
    }
}

pub const CAREER_ROADMAP_TEMPLATE: TaskTemplate<RoadmapProfile> = TaskTemplate {
    name: "career-roadmap",
    system: CAREER_ROADMAP_SYSTEM,
    render: render_prompt,
    shape: Shape::Object,
    max_tokens: 2000,
};

fn render_prompt(profile: &RoadmapProfile) -> String {
    let is_student = if profile.is_student { "Yes" } else { "No" };
    fill_placeholders(
        CAREER_ROADMAP_PROMPT_TEMPLATE,
        &[
            ("current_role", profile.current_role.as_str()),
            ("target_role", profile.target_role.as_str()),
            ("experience_years", profile.experience_years.as_str()),
            ("education_level", profile.education_level.as_str()),
            ("current_skills", profile.current_skills.as_str()),
            ("timeline_years", profile.timeline_years.as_str()),
            ("preferred_learning_style", profile.preferred_learning_style.as_str()),
            ("is_student", is_student),
            ("current_major", profile.current_major.as_str()),
            ("current_year", profile.current_year.as_str()),
            ("gpa", profile.gpa.as_str()),
            ("extracurricular_activities", profile.extracurricular_activities.as_str()),
            ("internship_experience", profile.internship_experience.as_str()),
            ("target_industry", profile.target_industry.as_str()),
        ],
    )
}
