use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::membership::model::MembershipStatus;
use crate::domain::membership::store::MembershipStore;
use crate::domain::membership::use_cases::get_status::{
    GetMembershipStatusParams, GetMembershipStatusUseCase,
};

pub struct GetMembershipStatusUseCaseImpl {
    pub store: Arc<dyn MembershipStore>,
}

#[async_trait]
impl GetMembershipStatusUseCase for GetMembershipStatusUseCaseImpl {
    async fn execute(&self, params: GetMembershipStatusParams) -> MembershipStatus {
        MembershipStatus {
            match_id: params.match_id,
            joined: self.store.is_joined(params.match_id),
            change: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::services::MembershipObserver;
    use crate::domain::shared::value_objects::MatchId;
    use mockall::mock;
    use std::collections::HashSet;

    mock! {
        pub Store {}

        impl MembershipStore for Store {
            fn is_joined(&self, match_id: MatchId) -> bool;
            fn join_match(&self, match_id: MatchId) -> bool;
            fn leave_match(&self, match_id: MatchId) -> bool;
            fn joined_ids(&self) -> HashSet<MatchId>;
            fn subscribe(&self, observer: Arc<dyn MembershipObserver>);
        }
    }

    #[tokio::test]
    async fn should_report_joined_match() {
        let mut store = MockStore::new();
        store
            .expect_is_joined()
            .withf(|id| *id == MatchId::new(3))
            .returning(|_| true);

        let use_case = GetMembershipStatusUseCaseImpl {
            store: Arc::new(store),
        };

        let status = use_case
            .execute(GetMembershipStatusParams {
                match_id: MatchId::new(3),
            })
            .await;

        assert!(status.joined);
        assert!(status.change.is_none());
    }

    #[tokio::test]
    async fn should_only_query_the_store() {
        let mut store = MockStore::new();
        store.expect_is_joined().returning(|_| false);
        store.expect_join_match().never();
        store.expect_leave_match().never();

        let use_case = GetMembershipStatusUseCaseImpl {
            store: Arc::new(store),
        };

        let status = use_case
            .execute(GetMembershipStatusParams {
                match_id: MatchId::new(4),
            })
            .await;

        assert!(!status.joined);
    }
}
