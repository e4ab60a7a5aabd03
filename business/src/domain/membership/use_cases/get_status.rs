use async_trait::async_trait;

use crate::domain::membership::model::MembershipStatus;
use crate::domain::shared::value_objects::MatchId;

pub struct GetMembershipStatusParams {
    pub match_id: MatchId,
}

/// Pure query, never fails.
#[async_trait]
pub trait GetMembershipStatusUseCase: Send + Sync {
    async fn execute(&self, params: GetMembershipStatusParams) -> MembershipStatus;
}
