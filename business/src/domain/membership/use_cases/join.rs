use async_trait::async_trait;

use crate::domain::matches::errors::MatchError;
use crate::domain::membership::model::MembershipStatus;
use crate::domain::shared::value_objects::MatchId;

pub struct JoinMatchParams {
    pub match_id: MatchId,
}

#[async_trait]
pub trait JoinMatchUseCase: Send + Sync {
    async fn execute(&self, params: JoinMatchParams) -> Result<MembershipStatus, MatchError>;
}
