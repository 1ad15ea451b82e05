use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

use crate::llm_client::{
    ClientOptions, DEFAULT_ENDPOINT, DEFAULT_MAX_ATTEMPTS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

/// Application configuration loaded from environment variables.
/// Startup fails if `GROQ_API_KEY` is missing or any value does not parse.
#[derive(Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub llm_endpoint: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_attempts: u32,
    pub llm_backoff_base: Duration,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let groq_api_key = lookup("GROQ_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'GROQ_API_KEY' is not set")?;

        let llm_temperature: f32 = parse_or(&lookup, "LLM_TEMPERATURE", DEFAULT_TEMPERATURE)?;
        ensure!(
            (0.0..=2.0).contains(&llm_temperature),
            "LLM_TEMPERATURE must be between 0 and 2"
        );

        let llm_max_attempts: u32 = parse_or(&lookup, "LLM_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        ensure!(llm_max_attempts >= 1, "LLM_MAX_ATTEMPTS must be at least 1");

        Ok(Config {
            groq_api_key,
            llm_endpoint: lookup("LLM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            llm_model: lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_temperature,
            llm_max_attempts,
            llm_backoff_base: Duration::from_millis(parse_or(&lookup, "LLM_BACKOFF_BASE_MS", 1000)?),
            llm_timeout: Duration::from_secs(parse_or(&lookup, "LLM_TIMEOUT_SECS", 120)?),
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            model: self.llm_model.clone(),
            temperature: self.llm_temperature,
            max_tokens: None,
            max_attempts: self.llm_max_attempts,
            backoff_base: self.llm_backoff_base,
        }
    }
}

// The API key never reaches the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("groq_api_key", &"<redacted>")
            .field("llm_endpoint", &self.llm_endpoint)
            .field("llm_model", &self.llm_model)
            .field("llm_temperature", &self.llm_temperature)
            .field("llm_max_attempts", &self.llm_max_attempts)
            .field("llm_backoff_base", &self.llm_backoff_base)
            .field("llm_timeout", &self.llm_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
