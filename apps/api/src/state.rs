use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Cancelled on shutdown; in-flight submissions stop waiting on the endpoint or backoff.
    pub shutdown: CancellationToken,
}
