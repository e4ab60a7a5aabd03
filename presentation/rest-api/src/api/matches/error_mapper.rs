use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::matches::errors::MatchError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MatchError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            MatchError::Repository(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("InternalError", &err.to_string())),
            ),
        }
    }
}
