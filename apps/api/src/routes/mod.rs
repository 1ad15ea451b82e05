pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::guidance::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile-driven guidance
        .route("/api/v1/career-paths", post(handlers::handle_career_paths))
        .route("/api/v1/job-matches", post(handlers::handle_job_matches))
        .route("/api/v1/skill-gaps", post(handlers::handle_skill_gaps))
        .route(
            "/api/v1/interview-prep",
            post(handlers::handle_interview_prep),
        )
        .route(
            "/api/v1/salary-insights",
            post(handlers::handle_salary_insights),
        )
        .route(
            "/api/v1/career-roadmap",
            post(handlers::handle_career_roadmap),
        )
        // Market dashboard
        .route("/api/v1/market/top-jobs", get(handlers::handle_top_jobs))
        .route(
            "/api/v1/market/careers",
            get(handlers::handle_career_demand),
        )
        .route("/api/v1/market/skills", get(handlers::handle_skill_demand))
        .with_state(state)
}
