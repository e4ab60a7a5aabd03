use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::MatchId;

use super::model::Match;

/// Read-only match catalog. `get_all` keeps the source order.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Match>, RepositoryError>;
    async fn get_by_id(&self, id: MatchId) -> Result<Match, RepositoryError>;
}
