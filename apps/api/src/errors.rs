use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::ClientError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] ClientError),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(err) => llm_parts(err),
        }
    }
}

/// End-user status, code and message for a client failure. Details go to the log only.
fn llm_parts(err: &ClientError) -> (StatusCode, &'static str, String) {
    match err {
        ClientError::InvalidCredential => {
            tracing::error!("LLM credential rejected; check GROQ_API_KEY");
            (
                StatusCode::BAD_GATEWAY,
                "LLM_CREDENTIAL_REJECTED",
                "The AI service is not configured correctly. Please contact support.".to_string(),
            )
        }
        ClientError::RateLimited { attempts } => {
            tracing::warn!("LLM rate limit exhausted after {attempts} attempt(s)");
            (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "Rate limit exceeded. Please try again in a few minutes.".to_string(),
            )
        }
        ClientError::TransportFailure { .. } | ClientError::Unreachable(_) => {
            tracing::error!("LLM unavailable: {err}");
            (
                StatusCode::BAD_GATEWAY,
                "LLM_UNAVAILABLE",
                "The AI service is currently unavailable. Please try again later.".to_string(),
            )
        }
        ClientError::MalformedEnvelope
        | ClientError::NoStructuredContent { .. }
        | ClientError::ParseFailure { .. } => {
            tracing::error!("LLM returned an unusable reply: {err}");
            (
                StatusCode::BAD_GATEWAY,
                "LLM_BAD_RESPONSE",
                "The AI service returned an unexpected response. Please try again.".to_string(),
            )
        }
        ClientError::Cancelled => (
            StatusCode::SERVICE_UNAVAILABLE,
            "SHUTTING_DOWN",
            "The server is shutting down. Please retry shortly.".to_string(),
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
