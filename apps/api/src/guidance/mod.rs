//! Career guidance features: one module per feature, each pairing a profile with a
//! `TaskTemplate` and the result schema the model is asked to produce.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod career_path;
pub mod career_roadmap;
pub mod handlers;
pub mod interview_coach;
pub mod job_matching;
pub mod lenient;
pub mod market_demand;
pub mod prompts;
pub mod salary_insights;
pub mod skill_gap;
pub mod validation;

/// Where a response's data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Model,
    Fallback,
}

#[derive(Debug, Serialize)]
pub struct GuidanceResponse<T> {
    pub data: T,
    pub source: ResultSource,
    pub generated_at: DateTime<Utc>,
}

impl<T> GuidanceResponse<T> {
    pub fn from_model(data: T) -> Self {
        Self {
            data,
            source: ResultSource::Model,
            generated_at: Utc::now(),
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            source: ResultSource::Fallback,
            generated_at: Utc::now(),
        }
    }
}
