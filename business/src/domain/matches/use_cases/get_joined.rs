use async_trait::async_trait;

use crate::domain::matches::errors::MatchError;
use crate::domain::matches::model::Match;

#[async_trait]
pub trait GetJoinedMatchesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Match>, MatchError>;
}
