use async_trait::async_trait;
use serde_json::Value;

use super::errors::SuggestionError;
use super::prompt::OutputShape;

/// Service port for invoking a generative model with a structured output contract.
///
/// Implementations return the raw model answer; checking it against the shape
/// is left to the caller.
#[async_trait]
pub trait StructuredGeneratorService: Send + Sync {
    async fn generate(
        &self,
        instruction: &str,
        output_shape: &OutputShape,
    ) -> Result<Value, SuggestionError>;
}
