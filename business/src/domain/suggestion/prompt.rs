use serde_json::{Value, json};

use super::model::{SuggestionRequest, day_name};

/// Shape the model answer must follow, as a JSON schema.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputShape {
    pub name: &'static str,
    pub schema: Value,
}

pub fn suggestion_output_shape() -> OutputShape {
    OutputShape {
        name: "match_suggestion",
        schema: json!({
            "type": "object",
            "properties": {
                "suggestedTime": {
                    "type": "string",
                    "description": "The suggested time for the match, e.g. \"6:00 PM\"."
                },
                "suggestedLocation": {
                    "type": "string",
                    "description": "The specific place for the match, e.g. \"Mitchell Park basketball courts\"."
                },
                "reasoning": {
                    "type": "string",
                    "description": "Why this time and place were chosen."
                }
            },
            "required": ["suggestedTime", "suggestedLocation", "reasoning"],
            "additionalProperties": false
        }),
    }
}

/// Builds the instruction sent to the model for one request.
pub fn build_instruction(request: &SuggestionRequest) -> String {
    let days = request
        .preferred_days
        .iter()
        .map(|day| day_name(*day))
        .collect::<Vec<_>>()
        .join(", ");

    let preferences = request.user_preferences.as_deref().unwrap_or("none");

    format!(
        r#"You are an assistant that suggests the best time and place for a pickup sports match.

You receive the sport, a general location, the days the players prefer and any extra preferences. Pick one specific time and one specific place for the match.

Sport: {}
General Location: {}
Preferred Days: {}
User Preferences: {}

Consider popular local venues for this sport in the given area and the times people usually play it on those days.
Explain your reasoning.

Answer with a JSON object with exactly these string fields:
{{
  "suggestedTime": "the suggested time",
  "suggestedLocation": "the suggested specific location",
  "reasoning": "why this time and location"
}}"#,
        request.sport, request.general_location, days, preferences
    )
}
