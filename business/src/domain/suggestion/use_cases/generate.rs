use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::Suggestion;

/// Raw suggestion input, validated by the use case before any model call.
pub struct GenerateSuggestionParams {
    pub sport: String,
    pub general_location: String,
    pub preferred_days: Vec<String>,
    pub user_preferences: Option<String>,
}

#[async_trait]
pub trait GenerateSuggestionUseCase: Send + Sync {
    async fn execute(&self, params: GenerateSuggestionParams)
    -> Result<Suggestion, SuggestionError>;
}
