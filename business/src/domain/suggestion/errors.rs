/// A single problem found while validating a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("suggestion.unsupported_sport")]
    UnsupportedSport(String),
    #[error("suggestion.location_too_short")]
    LocationTooShort,
    #[error("suggestion.no_preferred_days")]
    NoPreferredDays,
    #[error("suggestion.unknown_day")]
    UnknownDay(String),
}

impl ValidationIssue {
    /// Name of the request field the issue belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationIssue::UnsupportedSport(_) => "sport",
            ValidationIssue::LocationTooShort => "general_location",
            ValidationIssue::NoPreferredDays | ValidationIssue::UnknownDay(_) => "preferred_days",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.validation_failed")]
    Validation(Vec<ValidationIssue>),
    #[error("suggestion.generation_failed")]
    GenerationFailed,
    #[error("suggestion.malformed_response")]
    MalformedResponse,
}
