//! Market-wide snapshots for the home page and dashboard, with static fallbacks.
//!
//! Unlike the profile-driven features these take no input, and a failed model call
//! degrades to a fixed list instead of an error.

use serde::{Deserialize, Serialize};

use crate::guidance::lenient::null_as_default;
use crate::guidance::prompts::{
    CAREER_DEMAND_PROMPT, CAREER_DEMAND_SYSTEM, SKILL_DEMAND_PROMPT, SKILL_DEMAND_SYSTEM,
    TOP_JOBS_PROMPT, TOP_JOBS_SYSTEM,
};
use crate::llm_client::template::{Shape, TaskTemplate};

/// Demand as either a 0–100 score or a qualitative level ("High", "Medium", "Low").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Demand {
    Score(f64),
    Level(String),
}

impl Default for Demand {
    fn default() -> Self {
        Demand::Score(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerDemand {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub demand: Demand,
    #[serde(deserialize_with = "null_as_default")]
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillDemand {
    #[serde(deserialize_with = "null_as_default")]
    pub skill: String,
    #[serde(deserialize_with = "null_as_default")]
    pub demand: Demand,
    #[serde(deserialize_with = "null_as_default")]
    pub explanation: String,
}

/// One of the highest-paying jobs across industries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopJob {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(deserialize_with = "null_as_default")]
    pub salary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub growth_rate: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
}

pub const CAREER_DEMAND_TEMPLATE: TaskTemplate<()> = TaskTemplate {
    name: "career-demand",
    system: CAREER_DEMAND_SYSTEM,
    render: render_career_demand,
    shape: Shape::Array,
    max_tokens: 1000,
};

pub const SKILL_DEMAND_TEMPLATE: TaskTemplate<()> = TaskTemplate {
    name: "skill-demand",
    system: SKILL_DEMAND_SYSTEM,
    render: render_skill_demand,
    shape: Shape::Array,
    max_tokens: 1000,
};

pub const TOP_JOBS_TEMPLATE: TaskTemplate<()> = TaskTemplate {
    name: "top-jobs",
    system: TOP_JOBS_SYSTEM,
    render: render_top_jobs,
    shape: Shape::Array,
    max_tokens: 1000,
};

fn render_top_jobs(_: &()) -> String {
    TOP_JOBS_PROMPT.to_string()
}

fn render_career_demand(_: &()) -> String {
    CAREER_DEMAND_PROMPT.to_string()
}

fn render_skill_demand(_: &()) -> String {
    SKILL_DEMAND_PROMPT.to_string()
}

fn career(title: &str, score: f64, explanation: &str) -> CareerDemand {
    CareerDemand {
        title: title.to_string(),
        demand: Demand::Score(score),
        explanation: explanation.to_string(),
    }
}

fn top_job(
    title: &str,
    industry: &str,
    salary: &str,
    description: &str,
    growth_rate: &str,
    required_skills: [&str; 3],
) -> TopJob {
    TopJob {
        title: title.to_string(),
        industry: industry.to_string(),
        salary: salary.to_string(),
        description: description.to_string(),
        growth_rate: growth_rate.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn skill(name: &str, score: f64, explanation: &str) -> SkillDemand {
    SkillDemand {
        skill: name.to_string(),
        demand: Demand::Score(score),
        explanation: explanation.to_string(),
    }
}

pub fn fallback_top_jobs() -> Vec<TopJob> {
    vec![
        top_job(
            "Chief Technology Officer",
            "Technology",
            "$200,000 - $400,000",
            "Senior executive responsible for technology strategy and implementation",
            "15%",
            ["Strategic Planning", "Technical Leadership", "Business Acumen"],
        ),
        top_job(
            "Medical Surgeon",
            "Healthcare",
            "$300,000 - $600,000",
            "Specialized physician performing surgical procedures",
            "10%",
            ["Surgical Expertise", "Patient Care", "Decision Making"],
        ),
        top_job(
            "Investment Banker",
            "Finance",
            "$150,000 - $500,000",
            "Financial professional handling mergers, acquisitions, and capital raising",
            "12%",
            ["Financial Analysis", "Deal Structuring", "Client Relations"],
        ),
    ]
}

/// Shown when the model cannot be reached or replies with something unusable.
pub fn fallback_career_demand() -> Vec<CareerDemand> {
    vec![
        career(
            "Healthcare Professional",
            95.0,
            "Growing demand in healthcare services and patient care",
        ),
        career(
            "Software Engineer",
            90.0,
            "High demand for software development across industries",
        ),
        career(
            "Business Analyst",
            85.0,
            "Increasing need for data-driven business decisions",
        ),
        career(
            "Teacher/Educator",
            80.0,
            "Essential for education and skill development",
        ),
        career(
            "Environmental Specialist",
            75.0,
            "Growing focus on sustainability and environmental protection",
        ),
    ]
}

pub fn fallback_skill_demand() -> Vec<SkillDemand> {
    vec![
        skill(
            "Communication",
            95.0,
            "Essential across all industries for effective collaboration",
        ),
        skill(
            "Data Analysis",
            90.0,
            "Critical for decision-making in business and research",
        ),
        skill(
            "Project Management",
            85.0,
            "Valuable for organizing and leading initiatives",
        ),
        skill(
            "Digital Literacy",
            80.0,
            "Increasingly important in modern workplaces",
        ),
        skill(
            "Problem Solving",
            75.0,
            "Highly valued across all professional roles",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_demand_accepts_score_or_level() {
        let skills: Vec<SkillDemand> = serde_json::from_value(json!([
            {"skill": "Rust", "demand": 88, "explanation": "Systems work"},
            {"skill": "Empathy", "demand": "High", "explanation": "Client roles"}
        ]))
        .unwrap();
        assert_eq!(skills[0].demand, Demand::Score(88.0));
        assert_eq!(skills[1].demand, Demand::Level("High".to_string()));
    }

    #[test]
    fn test_demand_serializes_without_tag() {
        let value = serde_json::to_value(skill("SQL", 70.0, "Reporting")).unwrap();
        assert_eq!(value["demand"], json!(70.0));
    }

    #[test]
    fn test_fallbacks_have_five_ranked_entries() {
        let careers = fallback_career_demand();
        assert_eq!(careers.len(), 5);
        assert_eq!(careers[0].title, "Healthcare Professional");
        assert_eq!(fallback_skill_demand().len(), 5);
    }

    #[test]
    fn test_top_jobs_fallback_spans_three_industries() {
        let jobs = fallback_top_jobs();
        let industries: Vec<&str> = jobs.iter().map(|j| j.industry.as_str()).collect();
        assert_eq!(industries, vec!["Technology", "Healthcare", "Finance"]);
        assert!(jobs.iter().all(|j| j.required_skills.len() == 3));
    }

    #[test]
    fn test_top_job_tolerates_null_fields() {
        let jobs: Vec<TopJob> = serde_json::from_value(json!([
            {"title": "Patent Attorney", "industry": "Law", "growth_rate": null, "required_skills": null}
        ]))
        .unwrap();
        assert_eq!(jobs[0].industry, "Law");
        assert!(jobs[0].growth_rate.is_empty());
        assert!(jobs[0].required_skills.is_empty());
    }

    #[test]
    fn test_top_jobs_template_budget() {
        assert_eq!(TOP_JOBS_TEMPLATE.max_tokens, 1000);
        assert_eq!(TOP_JOBS_TEMPLATE.shape, Shape::Array);
        assert!(TOP_JOBS_TEMPLATE.user_prompt(&()).contains("\"growth_rate\""));
    }

    #[test]
    fn test_templates_need_no_profile() {
        assert!(CAREER_DEMAND_TEMPLATE.user_prompt(&()).contains("top 5"));
        assert_eq!(SKILL_DEMAND_TEMPLATE.shape, Shape::Array);
        assert_eq!(SKILL_DEMAND_TEMPLATE.max_tokens, 1000);
    }
}
