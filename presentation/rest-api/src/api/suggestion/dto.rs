use poem_openapi::Object;

use business::domain::suggestion::model::Suggestion;
use business::domain::suggestion::use_cases::generate::GenerateSuggestionParams;

#[derive(Debug, Clone, Object)]
pub struct SuggestionRequest {
    /// Basketball, Soccer or Tennis
    pub sport: String,
    /// City or neighbourhood, at least 2 characters
    pub general_location: String,
    /// Weekday names, full or three-letter
    pub preferred_days: Vec<String>,
    /// Free-text preferences such as "evenings" or "indoor"
    pub user_preferences: Option<String>,
}

impl From<SuggestionRequest> for GenerateSuggestionParams {
    fn from(request: SuggestionRequest) -> Self {
        Self {
            sport: request.sport,
            general_location: request.general_location,
            preferred_days: request.preferred_days,
            user_preferences: request.user_preferences,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionResponse {
    pub suggested_time: String,
    pub suggested_location: String,
    pub reasoning: String,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(s: Suggestion) -> Self {
        Self {
            suggested_time: s.suggested_time,
            suggested_location: s.suggested_location,
            reasoning: s.reasoning,
        }
    }
}
