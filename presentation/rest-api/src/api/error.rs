use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug, Clone)]
pub struct FieldErrorResponse {
    /// Request field the message belongs to
    pub field: String,
    pub message: String,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Per-field messages, only present on validation errors
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<Vec<FieldErrorResponse>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            fields: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
