//! Transport boundary: one HTTPS POST to the chat-completion endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use super::{ClientError, CompletionRequest};

/// Raw result of one transport call, before any classification.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// Sends one completion request. Implementations do not retry or classify statuses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &CompletionRequest) -> Result<TransportReply, ClientError>;
}

/// Bearer-authenticated JSON transport over reqwest.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &CompletionRequest) -> Result<TransportReply, ClientError> {
        debug!(endpoint = %self.endpoint, model = %request.model, "Sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("HTTP error: {e}");
                ClientError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body: {e}");
            ClientError::Unreachable(e.to_string())
        })?;

        Ok(TransportReply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
