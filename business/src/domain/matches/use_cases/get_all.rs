use async_trait::async_trait;

use crate::domain::matches::errors::MatchError;
use crate::domain::matches::filter::MatchFilter;
use crate::domain::matches::model::Match;

pub struct GetAllMatchesParams {
    pub filter: MatchFilter,
}

#[async_trait]
pub trait GetAllMatchesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllMatchesParams) -> Result<Vec<Match>, MatchError>;
}
