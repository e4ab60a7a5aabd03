use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::matches::filter::MatchFilter;
use business::domain::matches::use_cases::get_all::{GetAllMatchesParams, GetAllMatchesUseCase};
use business::domain::matches::use_cases::get_joined::GetJoinedMatchesUseCase;
use business::domain::shared::value_objects::Sport;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::matches::dto::MatchResponse;
use crate::api::tags::ApiTags;

pub struct MatchApi {
    get_all_use_case: Arc<dyn GetAllMatchesUseCase>,
    get_joined_use_case: Arc<dyn GetJoinedMatchesUseCase>,
}

impl MatchApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllMatchesUseCase>,
        get_joined_use_case: Arc<dyn GetJoinedMatchesUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_joined_use_case,
        }
    }
}

/// "All" (any case) or nothing means no sport filter.
fn parse_sport_filter(raw: Option<String>) -> Result<Option<Sport>, ErrorResponse> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("all") => Ok(None),
        Some(value) => value
            .parse::<Sport>()
            .map(Some)
            .map_err(|_| ErrorResponse::new("ValidationError", "match.invalid_sport")),
    }
}

/// Match catalog API
///
/// Read-only listing of scheduled matches.
#[OpenApi]
impl MatchApi {
    /// List matches
    ///
    /// Returns the catalog in its original order, optionally filtered by sport
    /// and by a case-insensitive search over venue and district.
    #[oai(path = "/matches", method = "get", tag = "ApiTags::Matches")]
    async fn get_all_matches(
        &self,
        /// Basketball, Soccer, Tennis or All
        sport: Query<Option<String>>,
        /// Substring of the venue or district
        location: Query<Option<String>>,
    ) -> GetAllMatchesResponse {
        let sport = match parse_sport_filter(sport.0) {
            Ok(sport) => sport,
            Err(err) => return GetAllMatchesResponse::BadRequest(Json(err)),
        };
        let params = GetAllMatchesParams {
            filter: MatchFilter::new(sport, location.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(matches) => {
                GetAllMatchesResponse::Ok(Json(matches.into_iter().map(|m| m.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllMatchesResponse::InternalError(json)
            }
        }
    }

    /// List joined matches
    ///
    /// Matches the current session has joined, in catalog order.
    #[oai(path = "/matches/joined", method = "get", tag = "ApiTags::Matches")]
    async fn get_joined_matches(&self) -> GetAllMatchesResponse {
        match self.get_joined_use_case.execute().await {
            Ok(matches) => {
                GetAllMatchesResponse::Ok(Json(matches.into_iter().map(|m| m.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllMatchesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllMatchesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MatchResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
