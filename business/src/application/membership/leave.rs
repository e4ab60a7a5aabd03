use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::membership::model::{MembershipChange, MembershipStatus};
use crate::domain::membership::store::MembershipStore;
use crate::domain::membership::use_cases::leave::{LeaveMatchParams, LeaveMatchUseCase};

pub struct LeaveMatchUseCaseImpl {
    pub store: Arc<dyn MembershipStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LeaveMatchUseCase for LeaveMatchUseCaseImpl {
    async fn execute(&self, params: LeaveMatchParams) -> MembershipStatus {
        let match_id = params.match_id;
        self.logger.info(&format!("Leaving match: {}", match_id));

        let removed = self.store.leave_match(match_id);
        self.logger.info(&format!(
            "Match {} left{}",
            match_id,
            if removed { "" } else { " (was not joined)" }
        ));

        MembershipStatus {
            match_id,
            joined: false,
            change: Some(MembershipChange::Left(match_id)),
        }
    }
}
