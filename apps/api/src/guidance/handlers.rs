use axum::{extract::State, Json};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::AppError;
use crate::guidance::career_path::{CareerPathProfile, CareerRecommendation, CAREER_PATH_TEMPLATE};
use crate::guidance::career_roadmap::{CareerRoadmap, RoadmapProfile, CAREER_ROADMAP_TEMPLATE};
use crate::guidance::interview_coach::{InterviewPrep, InterviewProfile, INTERVIEW_PREP_TEMPLATE};
use crate::guidance::job_matching::{sort_by_score, JobMatch, JobMatchProfile, JOB_MATCH_TEMPLATE};
use crate::guidance::market_demand::{
    fallback_career_demand, fallback_skill_demand, fallback_top_jobs, CareerDemand, SkillDemand,
    TopJob, CAREER_DEMAND_TEMPLATE, SKILL_DEMAND_TEMPLATE, TOP_JOBS_TEMPLATE,
};
use crate::guidance::salary_insights::{SalaryInsights, SalaryProfile, SALARY_INSIGHTS_TEMPLATE};
use crate::guidance::skill_gap::{SkillGap, SkillGapProfile, SKILL_GAP_TEMPLATE};
use crate::guidance::GuidanceResponse;
use crate::llm_client::template::TaskTemplate;
use crate::llm_client::ClientError;
use crate::state::AppState;

type GuidanceResult<T> = Result<Json<GuidanceResponse<T>>, AppError>;

/// POST /api/v1/career-paths
pub async fn handle_career_paths(
    State(state): State<AppState>,
    Json(profile): Json<CareerPathProfile>,
) -> GuidanceResult<Vec<CareerRecommendation>> {
    profile.validate()?;
    let paths = state
        .llm
        .request_typed(&CAREER_PATH_TEMPLATE, &profile, &state.shutdown)
        .await?;
    Ok(Json(GuidanceResponse::from_model(paths)))
}

/// POST /api/v1/job-matches
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Json(profile): Json<JobMatchProfile>,
) -> GuidanceResult<Vec<JobMatch>> {
    profile.validate()?;
    let mut matches: Vec<JobMatch> = state
        .llm
        .request_typed(&JOB_MATCH_TEMPLATE, &profile, &state.shutdown)
        .await?;
    sort_by_score(&mut matches);
    Ok(Json(GuidanceResponse::from_model(matches)))
}

/// POST /api/v1/skill-gaps
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Json(profile): Json<SkillGapProfile>,
) -> GuidanceResult<Vec<SkillGap>> {
    profile.validate()?;
    let gaps = state
        .llm
        .request_typed(&SKILL_GAP_TEMPLATE, &profile, &state.shutdown)
        .await?;
    Ok(Json(GuidanceResponse::from_model(gaps)))
}

/// POST /api/v1/interview-prep
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    Json(profile): Json<InterviewProfile>,
) -> GuidanceResult<InterviewPrep> {
    profile.validate()?;
    let prep = state
        .llm
        .request_typed(&INTERVIEW_PREP_TEMPLATE, &profile, &state.shutdown)
        .await?;
    Ok(Json(GuidanceResponse::from_model(prep)))
}

/// POST /api/v1/salary-insights
pub async fn handle_salary_insights(
    State(state): State<AppState>,
    Json(profile): Json<SalaryProfile>,
) -> GuidanceResult<SalaryInsights> {
    profile.validate()?;
    let insights = state
        .llm
        .request_typed(&SALARY_INSIGHTS_TEMPLATE, &profile, &state.shutdown)
        .await?;
    Ok(Json(GuidanceResponse::from_model(insights)))
}

/// POST /api/v1/career-roadmap
pub async fn handle_career_roadmap(
    State(state): State<AppState>,
    Json(profile): Json<RoadmapProfile>,
) -> GuidanceResult<CareerRoadmap> {
    profile.validate()?;
    let roadmap: CareerRoadmap = state
        .llm
        .request_typed(&CAREER_ROADMAP_TEMPLATE, &profile, &state.shutdown)
        .await?;
    tracing::debug!(
        phases = roadmap.timeline.len(),
        milestones = roadmap.milestone_count(),
        "Roadmap generated"
    );
    Ok(Json(GuidanceResponse::from_model(roadmap)))
}

/// GET /api/v1/market/top-jobs
pub async fn handle_top_jobs(State(state): State<AppState>) -> GuidanceResult<Vec<TopJob>> {
    market_snapshot(&state, &TOP_JOBS_TEMPLATE, fallback_top_jobs).await
}

/// GET /api/v1/market/careers
pub async fn handle_career_demand(
    State(state): State<AppState>,
) -> GuidanceResult<Vec<CareerDemand>> {
    market_snapshot(&state, &CAREER_DEMAND_TEMPLATE, fallback_career_demand).await
}

/// GET /api/v1/market/skills
pub async fn handle_skill_demand(State(state): State<AppState>) -> GuidanceResult<Vec<SkillDemand>> {
    market_snapshot(&state, &SKILL_DEMAND_TEMPLATE, fallback_skill_demand).await
}

/// Asks the model for a market snapshot, serving `fallback` on any failure except shutdown.
async fn market_snapshot<T: DeserializeOwned>(
    state: &AppState,
    template: &TaskTemplate<()>,
    fallback: fn() -> T,
) -> GuidanceResult<T> {
    match state.llm.request_typed(template, &(), &state.shutdown).await {
        Ok(data) => Ok(Json(GuidanceResponse::from_model(data))),
        Err(ClientError::Cancelled) => Err(ClientError::Cancelled.into()),
        Err(err) => {
            warn!(template = template.name, "Serving static market data: {err}");
            Ok(Json(GuidanceResponse::fallback(fallback())))
        }
    }
}
