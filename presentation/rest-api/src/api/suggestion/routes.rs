use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::suggestion::use_cases::generate::GenerateSuggestionUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::{SuggestionRequest, SuggestionResponse};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    generate_use_case: Arc<dyn GenerateSuggestionUseCase>,
}

impl SuggestionApi {
    pub fn new(generate_use_case: Arc<dyn GenerateSuggestionUseCase>) -> Self {
        Self { generate_use_case }
    }
}

/// Suggestion API
///
/// AI-generated time and venue suggestions for organising a match.
#[OpenApi]
impl SuggestionApi {
    /// Suggest a match time and venue
    ///
    /// The request is validated before the model is called. All validation
    /// problems are reported together.
    #[oai(path = "/suggestions", method = "post", tag = "ApiTags::Suggestions")]
    async fn create_suggestion(&self, body: Json<SuggestionRequest>) -> CreateSuggestionResponse {
        match self.generate_use_case.execute(body.0.into()).await {
            Ok(suggestion) => CreateSuggestionResponse::Ok(Json(suggestion.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => CreateSuggestionResponse::UnprocessableEntity(json),
                    _ => CreateSuggestionResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateSuggestionResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
