use std::env;
use std::time::Duration;

use anyhow::Context;
use openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: API key (required)
/// - OPENAI_MODEL: chat model (default: "gpt-4o-mini")
/// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
/// - OPENAI_TIMEOUT_SECS: request timeout in seconds (default: 30)
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("OPENAI_API_KEY environment variable must be set")?;

        Self::from_parts(
            api_key,
            env::var("OPENAI_MODEL").ok(),
            env::var("OPENAI_BASE_URL").ok(),
            env::var("OPENAI_TIMEOUT_SECS").ok(),
        )
    }

    fn from_parts(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> anyhow::Result<Self> {
        let timeout = match timeout_secs {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("OPENAI_TIMEOUT_SECS is not a number: {raw}"))?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
        })
    }
}
