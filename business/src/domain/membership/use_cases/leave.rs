use async_trait::async_trait;

use crate::domain::membership::model::MembershipStatus;
use crate::domain::shared::value_objects::MatchId;

pub struct LeaveMatchParams {
    pub match_id: MatchId,
}

/// Leaving never fails; leaving a match that was not joined is a no-op.
#[async_trait]
pub trait LeaveMatchUseCase: Send + Sync {
    async fn execute(&self, params: LeaveMatchParams) -> MembershipStatus;
}
