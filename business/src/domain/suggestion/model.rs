use chrono::Weekday;
use serde_json::Value;

use crate::domain::shared::value_objects::Sport;

use super::errors::{SuggestionError, ValidationIssue};

const MIN_LOCATION_LENGTH: usize = 2;

/// Validated input for a match time/location suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub sport: Sport,
    pub general_location: String,
    /// Preferred days in the order the user gave them, without repeats.
    pub preferred_days: Vec<Weekday>,
    pub user_preferences: Option<String>,
}

impl SuggestionRequest {
    /// Validates raw user input. Every problem found is reported, not just the first one.
    pub fn new(
        sport: &str,
        general_location: &str,
        preferred_days: &[String],
        user_preferences: Option<&str>,
    ) -> Result<Self, SuggestionError> {
        let mut issues = Vec::new();

        let sport = match Sport::from_name(sport) {
            Some(sport) => Some(sport),
            None => {
                issues.push(ValidationIssue::UnsupportedSport(sport.to_string()));
                None
            }
        };

        let general_location = general_location.trim();
        if general_location.chars().count() < MIN_LOCATION_LENGTH {
            issues.push(ValidationIssue::LocationTooShort);
        }

        let mut days = Vec::new();
        let mut saw_any_day = false;
        for raw in preferred_days.iter().map(|d| d.trim()).filter(|d| !d.is_empty()) {
            saw_any_day = true;
            match parse_day(raw) {
                Some(day) if !days.contains(&day) => days.push(day),
                Some(_) => {}
                None => issues.push(ValidationIssue::UnknownDay(raw.to_string())),
            }
        }
        if !saw_any_day {
            issues.push(ValidationIssue::NoPreferredDays);
        }

        let user_preferences = user_preferences
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        match sport {
            Some(sport) if issues.is_empty() => Ok(Self {
                sport,
                general_location: general_location.to_string(),
                preferred_days: days,
                user_preferences,
            }),
            _ => Err(SuggestionError::Validation(issues)),
        }
    }
}

/// Parses a weekday from its full English name or three-letter abbreviation.
pub fn parse_day(value: &str) -> Option<Weekday> {
    match value.trim().to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A suggested time and place for a match, with the model's reasoning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub suggested_time: String,
    pub suggested_location: String,
    pub reasoning: String,
}

impl Suggestion {
    pub fn new(
        suggested_time: String,
        suggested_location: String,
        reasoning: String,
    ) -> Result<Self, SuggestionError> {
        if [&suggested_time, &suggested_location, &reasoning]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(SuggestionError::MalformedResponse);
        }

        Ok(Self {
            suggested_time,
            suggested_location,
            reasoning,
        })
    }

    /// Checks raw model output against the suggestion shape.
    /// Unknown keys are ignored; missing, non-string or blank fields are rejected.
    pub fn from_model_output(output: &Value) -> Result<Self, SuggestionError> {
        let object = output
            .as_object()
            .ok_or(SuggestionError::MalformedResponse)?;

        let field = |name: &str| {
            object
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(SuggestionError::MalformedResponse)
        };

        Self::new(
            field("suggestedTime")?,
            field("suggestedLocation")?,
            field("reasoning")?,
        )
    }
}
