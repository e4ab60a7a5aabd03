use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::suggestion::errors::SuggestionError;

use crate::api::error::{ErrorResponse, FieldErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            SuggestionError::Validation(issues) => {
                let fields = issues
                    .iter()
                    .map(|issue| FieldErrorResponse {
                        field: issue.field().to_string(),
                        message: issue.to_string(),
                    })
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: "suggestion.validation_failed".to_string(),
                        fields: Some(fields),
                    }),
                )
            }
            // Provider detail stays in the logs
            SuggestionError::GenerationFailed | SuggestionError::MalformedResponse => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(
                    "GenerationError",
                    "suggestion.generation_failed",
                )),
            ),
        }
    }
}
