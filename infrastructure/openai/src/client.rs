use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared OpenAI HTTP client configuration.
/// The request timeout is the only timeout applied to a suggestion.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl OpenAIClient {
    pub fn new(api_key: String, base_url: String, model: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_chat_completions_url_without_double_slash() {
        let client = OpenAIClient::new(
            "key".to_string(),
            "http://localhost:9000/v1/".to_string(),
            DEFAULT_MODEL.to_string(),
            DEFAULT_TIMEOUT,
        );

        assert_eq!(
            client.chat_completions_url(),
            "http://localhost:9000/v1/chat/completions"
        );
    }

    #[test]
    fn should_build_bearer_header() {
        let client = OpenAIClient::new(
            "secret".to_string(),
            DEFAULT_BASE_URL.to_string(),
            DEFAULT_MODEL.to_string(),
            DEFAULT_TIMEOUT,
        );

        assert_eq!(client.auth_header(), "Bearer secret");
        assert_eq!(client.model, DEFAULT_MODEL);
    }
}
