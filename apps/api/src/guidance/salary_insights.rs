//! Salary ranges, market trends and negotiation guidance for a role.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::guidance::lenient::null_as_default;
use crate::guidance::prompts::{SALARY_INSIGHTS_PROMPT_TEMPLATE, SALARY_INSIGHTS_SYSTEM};
use crate::guidance::validation::{optional_non_negative_number, require_text};
use crate::llm_client::template::{fill_placeholders, Shape, TaskTemplate};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SalaryProfile {
    pub role: String,
    pub location: String,
    pub experience_years: String,
    pub education_level: String,
    pub industry: String,
    pub company_size: String,
}

impl SalaryProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("role", &self.role)?;
        optional_non_negative_number("experience_years", &self.experience_years)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryBands {
    #[serde(deserialize_with = "null_as_default")]
    pub entry_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mid_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub senior_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expert_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketTrend {
    #[serde(deserialize_with = "null_as_default")]
    pub trend: String,
    #[serde(deserialize_with = "null_as_default")]
    pub explanation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationFactor {
    #[serde(deserialize_with = "null_as_default")]
    pub factor: String,
    #[serde(deserialize_with = "null_as_default")]
    pub impact: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitsAndPerks {
    #[serde(deserialize_with = "null_as_default")]
    pub common_benefits: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub industry_specific: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub negotiation_tips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPotential {
    #[serde(deserialize_with = "null_as_default")]
    pub career_path: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub salary_progression: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills_for_growth: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryInsights {
    #[serde(deserialize_with = "null_as_default")]
    pub salary_range: SalaryBands,
    #[serde(deserialize_with = "null_as_default")]
    pub market_trends: Vec<MarketTrend>,
    #[serde(deserialize_with = "null_as_default")]
    pub location_factors: Vec<LocationFactor>,
    #[serde(deserialize_with = "null_as_default")]
    pub benefits_and_perks: BenefitsAndPerks,
    #[serde(deserialize_with = "null_as_default")]
    pub growth_potential: GrowthPotential,
}

pub const SALARY_INSIGHTS_TEMPLATE: TaskTemplate<SalaryProfile> = TaskTemplate {
    name: "salary-insights",
    system: SALARY_INSIGHTS_SYSTEM,
    render: render_prompt,
    shape: Shape::Object,
    max_tokens: 2000,
};

fn render_prompt(profile: &SalaryProfile) -> String {
    fill_placeholders(
        SALARY_INSIGHTS_PROMPT_TEMPLATE,
        &[
            ("role", profile.role.as_str()),
            ("location", profile.location.as_str()),
            ("experience_years", profile.experience_years.as_str()),
            ("education_level", profile.education_level.as_str()),
            ("industry", profile.industry.as_str()),
            ("company_size", profile.company_size.as_str()),
        ],
    )
}
