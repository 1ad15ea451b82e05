//! LLM Client: the single point of entry for all chat-completion calls in Pathfinder.
//!
//! ARCHITECTURAL RULE: No other module may call the completion endpoint directly.
//! Every guidance feature supplies a `TaskTemplate` and goes through `request_structured`.
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

pub mod extract;
pub mod retry;
pub mod template;
pub mod transport;

use self::retry::RetryState;
use self::template::{Shape, TaskTemplate};
use self::transport::{HttpTransport, Transport, TransportReply};

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_millis(1000);

/// Terminal failure of one submission.
///
/// Display strings never include raw model output; `ParseFailure::raw` is for logs only.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("LLM API rejected the credential")]
    InvalidCredential,

    #[error("Rate limited after {attempts} attempt(s)")]
    RateLimited { attempts: u32 },

    #[error("API error (status {status}): {status_text}")]
    TransportFailure { status: u16, status_text: String },

    #[error("LLM response envelope carried no message content")]
    MalformedEnvelope,

    #[error("LLM reply contained no JSON {expected}")]
    NoStructuredContent { expected: Shape },

    #[error("LLM reply could not be parsed: {reason}")]
    ParseFailure { raw: String, reason: String },

    #[error("LLM endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    /// Only rate limiting is worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::RateLimited { .. } => true,
            ClientError::InvalidCredential
            | ClientError::TransportFailure { .. }
            | ClientError::MalformedEnvelope
            | ClientError::NoStructuredContent { .. }
            | ClientError::ParseFailure { .. }
            | ClientError::Unreachable(_)
            | ClientError::Cancelled => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Wire body of one chat-completion call.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// The first choice's message content, if present and non-empty.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .filter(|c| !c.trim().is_empty())
    }
}

/// Per-call tuning shared by every template.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub model: String,
    pub temperature: f32,
    /// Overrides every template's own `max_tokens` when set.
    pub max_tokens: Option<u32>,
    pub max_attempts: u32,
    pub backoff_base: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }
}

/// The resilient structured-response client. Stateless between calls; cheap to clone.
#[derive(Clone)]
pub struct LlmClient {
    transport: Arc<dyn Transport>,
    options: ClientOptions,
}

impl LlmClient {
    /// Builds a client that talks HTTPS to `endpoint` with a bearer `api_key`.
    pub fn new(
        endpoint: String,
        api_key: String,
        timeout: Duration,
        options: ClientOptions,
    ) -> reqwest::Result<Self> {
        let transport = HttpTransport::new(endpoint, api_key, timeout)?;
        Ok(Self::with_transport(Arc::new(transport), options))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, options: ClientOptions) -> Self {
        Self { transport, options }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Renders `profile` through `template` into a fresh completion request.
    pub fn build_request<P>(&self, template: &TaskTemplate<P>, profile: &P) -> CompletionRequest {
        CompletionRequest {
            model: self.options.model.clone(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: template.system.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: template.user_prompt(profile),
                },
            ],
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens.unwrap_or(template.max_tokens),
        }
    }

    /// Runs one submission: call, classify, retry on rate limiting, extract and parse.
    ///
    /// `cancel` is honoured while awaiting the endpoint and while backing off.
    pub async fn request_structured<P>(
        &self,
        template: &TaskTemplate<P>,
        profile: &P,
        cancel: &CancellationToken,
    ) -> Result<Value, ClientError> {
        let request = self.build_request(template, profile);
        let span = info_span!("submission", template = template.name, id = %Uuid::new_v4());

        async {
            let content = self.call_with_retry(&request, cancel).await?;
            let value = extract::extract_json(&content, template.shape)?;
            debug!("Structured reply parsed");
            Ok::<_, ClientError>(value)
        }
        .instrument(span)
        .await
    }

    /// Like `request_structured`, then deserializes the value into `T`.
    /// A value that does not fit `T` is a `ParseFailure`.
    pub async fn request_typed<T: DeserializeOwned, P>(
        &self,
        template: &TaskTemplate<P>,
        profile: &P,
        cancel: &CancellationToken,
    ) -> Result<T, ClientError> {
        let value = self.request_structured(template, profile, cancel).await?;
        let raw = value.to_string();
        serde_json::from_value(value).map_err(|e| {
            warn!(template = template.name, raw = %raw, "Reply does not match expected schema: {e}");
            ClientError::ParseFailure {
                raw,
                reason: e.to_string(),
            }
        })
    }

    /// Returns the reply's message content, retrying rate-limited attempts with backoff.
    async fn call_with_retry(
        &self,
        request: &CompletionRequest,
        cancel: &CancellationToken,
    ) -> Result<String, ClientError> {
        let mut retry = RetryState::new(self.options.max_attempts, self.options.backoff_base);

        loop {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(ClientError::Cancelled),
                reply = self.transport.send(request) => {
                    reply.and_then(|reply| classify(reply, retry.attempt()))
                }
            };

            let err = match outcome {
                Ok(content) => return Ok(content),
                Err(err) if err.is_retryable() => err,
                Err(err) => {
                    error!("LLM call failed: {err}");
                    return Err(err);
                }
            };

            let attempt = retry.attempt() + 1;
            let Some(delay) = retry.next_delay(err) else {
                let err = retry.into_error();
                error!("LLM call failed after {attempt} attempt(s): {err}");
                return Err(err);
            };

            warn!(
                "LLM call attempt {}/{} was rate limited, retrying after {}ms",
                attempt,
                retry.max_attempts(),
                delay.as_millis()
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}

/// Maps a raw reply to its message content or a classified failure.
fn classify(reply: TransportReply, attempt: u32) -> Result<String, ClientError> {
    match reply.status {
        200..=299 => {
            let envelope: CompletionResponse =
                serde_json::from_str(&reply.body).unwrap_or_default();
            envelope.content().map(str::to_string).ok_or_else(|| {
                error!("Invalid response format from API: no message content");
                ClientError::MalformedEnvelope
            })
        }
        status => {
            // Error bodies are diagnostic only; anything unparseable reads as `{}`.
            let error_body: Value =
                serde_json::from_str(&reply.body).unwrap_or_else(|_| Value::Object(Default::default()));
            warn!(
                status,
                status_text = %reply.status_text,
                error = %error_body,
                "LLM API returned an error status"
            );
            Err(match status {
                401 => ClientError::InvalidCredential,
                429 => ClientError::RateLimited {
                    attempts: attempt + 1,
                },
                _ => ClientError::TransportFailure {
                    status,
                    status_text: reply.status_text,
                },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::transport::scripted::{content_reply, status_reply, ScriptedTransport};
    use super::*;
    use serde_json::json;
    use tokio::time::Instant;

    fn array_template() -> TaskTemplate<String> {
        fn render(topic: &String) -> String {
            format!("List {topic} as a JSON array.")
        }
        TaskTemplate {
            name: "test-array",
            system: "Reply with a JSON array only.",
            render,
            shape: Shape::Array,
            max_tokens: 2000,
        }
    }

    fn object_template() -> TaskTemplate<String> {
        fn render(topic: &String) -> String {
            format!("Describe {topic} as a JSON object.")
        }
        TaskTemplate {
            name: "test-object",
            system: "Reply with a JSON object only.",
            render,
            shape: Shape::Object,
            max_tokens: 1000,
        }
    }

    fn client_with(transport: Arc<ScriptedTransport>) -> LlmClient {
        LlmClient::with_transport(transport, ClientOptions::default())
    }

    fn topic() -> String {
        "careers".to_string()
    }

    #[test]
    fn test_build_request_has_system_then_user_message() {
        let client = client_with(Arc::new(ScriptedTransport::new([])));
        let request = client.build_request(&array_template(), &topic());

        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.max_tokens, 2000);
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(
            request.messages,
            vec![
                ChatMessage {
                    role: Role::System,
                    content: "Reply with a JSON array only.".to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: "List careers as a JSON array.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_max_tokens_option_overrides_template() {
        let options = ClientOptions {
            max_tokens: Some(512),
            ..ClientOptions::default()
        };
        let client = LlmClient::with_transport(Arc::new(ScriptedTransport::new([])), options);
        assert_eq!(client.build_request(&object_template(), &topic()).max_tokens, 512);
    }

    #[test]
    fn test_request_serializes_to_wire_format() {
        let client = client_with(Arc::new(ScriptedTransport::new([])));
        let body = serde_json::to_value(client.build_request(&object_template(), &topic())).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["model"], DEFAULT_MODEL);
    }

    #[test]
    fn test_only_rate_limiting_is_retryable() {
        assert!(ClientError::RateLimited { attempts: 1 }.is_retryable());
        assert!(!ClientError::InvalidCredential.is_retryable());
        assert!(!ClientError::MalformedEnvelope.is_retryable());
        assert!(!ClientError::Cancelled.is_retryable());
        assert!(!ClientError::TransportFailure {
            status: 500,
            status_text: "Internal Server Error".to_string()
        }
        .is_retryable());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pure_json_reply_is_returned_deep_equal() {
        let transport = Arc::new(ScriptedTransport::new([content_reply(
            r#"[{"title": "Nurse", "required_skills": ["Care"]}]"#,
        )]));
        let client = client_with(transport.clone());

        let value = client
            .request_structured(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(value, json!([{"title": "Nurse", "required_skills": ["Care"]}]));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fenced_reply_parses_like_plain_reply() {
        let transport = Arc::new(ScriptedTransport::new([content_reply(
            "```json\n{\"interview_tips\": [\"Research the company\"]}\n```",
        )]));
        let client = client_with(transport);

        let value = client
            .request_structured(&object_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(value, json!({"interview_tips": ["Research the company"]}));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unauthorized_is_terminal_without_delay() {
        let transport = Arc::new(ScriptedTransport::new([
            status_reply(401, "Unauthorized", r#"{"error": {"message": "Invalid API Key"}}"#),
            content_reply("[]"),
        ]));
        let client = client_with(transport.clone());
        let started = Instant::now();

        let err = client
            .request_structured(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidCredential));
        assert_eq!(transport.call_count(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_backs_off_two_then_four_seconds_and_gives_up() {
        let transport = Arc::new(ScriptedTransport::new([
            status_reply(429, "Too Many Requests", ""),
            status_reply(429, "Too Many Requests", ""),
            status_reply(429, "Too Many Requests", ""),
            content_reply("[]"),
        ]));
        let client = client_with(transport.clone());

        let err = client
            .request_structured(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::RateLimited { attempts: 3 }));
        assert_eq!(transport.call_count(), 3);

        let times = transport.call_times();
        assert_eq!(times[1] - times[0], Duration::from_secs(2));
        assert_eq!(times[2] - times[1], Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_then_success_recovers() {
        let transport = Arc::new(ScriptedTransport::new([
            status_reply(429, "Too Many Requests", "not json at all"),
            content_reply(r#"{"ok": true}"#),
        ]));
        let client = client_with(transport.clone());

        let value = client
            .request_structured(&object_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(value, json!({"ok": true}));
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_is_terminal_transport_failure() {
        let transport = Arc::new(ScriptedTransport::new([
            status_reply(503, "Service Unavailable", "<html>down</html>"),
            content_reply("[]"),
        ]));
        let client = client_with(transport.clone());

        let err = client
            .request_structured(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap_err();

        match err {
            ClientError::TransportFailure {
                status,
                status_text,
            } => {
                assert_eq!(status, 503);
                assert_eq!(status_text, "Service Unavailable");
            }
            other => panic!("expected TransportFailure, got {other:?}"),
        }
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_or_empty_content_is_malformed_envelope() {
        for body in [
            r#"{"choices": []}"#,
            r#"{"choices": [{"message": {"content": ""}}]}"#,
            r#"{"choices": [{"message": {}}]}"#,
            r#"{"id": "cmpl-1"}"#,
            "not json",
        ] {
            let transport = Arc::new(ScriptedTransport::new([status_reply(200, "OK", body)]));
            let client = client_with(transport.clone());

            let err = client
                .request_structured(&array_template(), &topic(), &CancellationToken::new())
                .await
                .unwrap_err();

            assert!(matches!(err, ClientError::MalformedEnvelope), "body: {body}");
            assert_eq!(transport.call_count(), 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_without_delimiters_is_not_retried() {
        let transport = Arc::new(ScriptedTransport::new([
            content_reply("I'm sorry, I can't help with that."),
            content_reply("[]"),
        ]));
        let client = client_with(transport.clone());

        let err = client
            .request_structured(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::NoStructuredContent { expected: Shape::Array }));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_json_keeps_raw_substring() {
        let transport = Arc::new(ScriptedTransport::new([content_reply("{ invalid json ")]));
        let client = client_with(transport);

        let err = client
            .request_structured(&object_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap_err();

        match err {
            ClientError::ParseFailure { raw, .. } => assert_eq!(raw, "{ invalid json "),
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_request_rejects_wrong_schema() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Career {
            title: String,
        }

        let transport = Arc::new(ScriptedTransport::new([content_reply(r#"[{"name": "x"}]"#)]));
        let client = client_with(transport);

        let err = client
            .request_typed::<Vec<Career>, _>(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap_err();

        match err {
            ClientError::ParseFailure { raw, .. } => assert_eq!(raw, r#"[{"name":"x"}]"#),
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_request_deserializes_value() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Career {
            title: String,
        }

        let transport = Arc::new(ScriptedTransport::new([content_reply(
            r#"Here you go: [{"title": "Welder"}]"#,
        )]));
        let client = client_with(transport);

        let careers: Vec<Career> = client
            .request_typed(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(
            careers,
            vec![Career {
                title: "Welder".to_string()
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_during_backoff_stops_retries() {
        let transport = Arc::new(ScriptedTransport::new([
            status_reply(429, "Too Many Requests", ""),
            content_reply("[]"),
        ]));
        let client = client_with(transport.clone());
        let cancel = CancellationToken::new();

        let canceller = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(500)).await;
                cancel.cancel();
            })
        };

        let err = client
            .request_structured(&array_template(), &topic(), &cancel)
            .await
            .unwrap_err();
        canceller.await.unwrap();

        assert!(matches!(err, ClientError::Cancelled));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_cancelled_token_skips_the_call() {
        let transport = Arc::new(ScriptedTransport::new([content_reply("[]")]));
        let client = client_with(transport.clone());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = client
            .request_structured(&array_template(), &topic(), &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Cancelled));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_attempt_sends_the_same_request() {
        let transport = Arc::new(ScriptedTransport::new([
            status_reply(429, "Too Many Requests", ""),
            content_reply("[1]"),
        ]));
        let client = client_with(transport.clone());

        client
            .request_structured(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].messages, requests[1].messages);
    }

    #[tokio::test]
    async fn test_http_unauthorized_end_to_end() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new(
            server.uri(),
            "bad-key".to_string(),
            Duration::from_secs(5),
            ClientOptions::default(),
        )
        .unwrap();

        let err = client
            .request_structured(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidCredential));
    }

    #[tokio::test]
    async fn test_http_success_end_to_end() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "```json\n[{\"a\":1}]\n```"},
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new(
            format!("{}/openai/v1/chat/completions", server.uri()),
            "key".to_string(),
            Duration::from_secs(5),
            ClientOptions::default(),
        )
        .unwrap();

        let value = client
            .request_structured(&array_template(), &topic(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(value, json!([{"a": 1}]));
    }
}
