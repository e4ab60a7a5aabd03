use async_trait::async_trait;
use regex::Regex;
use serde_json::{Value, json};

use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::prompt::OutputShape;
use business::domain::suggestion::services::StructuredGeneratorService;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You help people organise pickup sports matches.
Suggest real, specific venues and times that local players would recognise.
Keep the reasoning short and practical.

Return ONLY a JSON object that follows the requested schema, no additional text."#;

/// Model-invocation adapter backed by OpenAI chat completions with strict JSON schema output.
pub struct SuggestionGeneratorOpenAI {
    client: OpenAIClient,
}

impl SuggestionGeneratorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(model: &str, instruction: &str, output_shape: &OutputShape) -> Value {
        json!({
            "model": model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": instruction},
            ],
            "temperature": 0.7,
            "max_tokens": 500,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": output_shape.name,
                    "strict": true,
                    "schema": output_shape.schema,
                },
            },
        })
    }

    /// Pulls the assistant text out of a chat completion. A refusal counts as a failure.
    fn extract_content(data: &Value) -> Result<&str, SuggestionError> {
        let message = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .map(|choice| &choice["message"])
            .ok_or(SuggestionError::GenerationFailed)?;

        if message["refusal"].as_str().is_some() {
            return Err(SuggestionError::GenerationFailed);
        }

        message["content"]
            .as_str()
            .ok_or(SuggestionError::GenerationFailed)
    }

    /// Parses the assistant text into JSON. Markdown fences and surrounding prose are tolerated.
    fn parse_content(content: &str) -> Result<Value, SuggestionError> {
        let mut json_text = content.trim().to_string();
        if json_text.starts_with("```json") {
            json_text = json_text
                .replace("```json", "")
                .replace("```", "")
                .trim()
                .to_string();
        } else if json_text.starts_with("```") {
            json_text = json_text.replace("```", "").trim().to_string();
        }

        if let Ok(value) = serde_json::from_str::<Value>(&json_text) {
            return Ok(value);
        }

        let object = Regex::new(r"\{[\s\S]*\}")
            .ok()
            .and_then(|re| re.find(&json_text))
            .ok_or(SuggestionError::MalformedResponse)?;

        serde_json::from_str(object.as_str()).map_err(|_| SuggestionError::MalformedResponse)
    }
}

#[async_trait]
impl StructuredGeneratorService for SuggestionGeneratorOpenAI {
    async fn generate(
        &self,
        instruction: &str,
        output_shape: &OutputShape,
    ) -> Result<Value, SuggestionError> {
        let body = Self::build_body(&self.client.model, instruction, output_shape);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| SuggestionError::GenerationFailed)?;

        if !response.status().is_success() {
            return Err(SuggestionError::GenerationFailed);
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| SuggestionError::GenerationFailed)?;

        let content = Self::extract_content(&data)?;

        Self::parse_content(content)
    }
}
