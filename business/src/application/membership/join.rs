use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::matches::errors::MatchError;
use crate::domain::matches::repository::MatchRepository;
use crate::domain::membership::model::{MembershipChange, MembershipStatus};
use crate::domain::membership::store::MembershipStore;
use crate::domain::membership::use_cases::join::{JoinMatchParams, JoinMatchUseCase};

pub struct JoinMatchUseCaseImpl {
    pub repository: Arc<dyn MatchRepository>,
    pub store: Arc<dyn MembershipStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl JoinMatchUseCase for JoinMatchUseCaseImpl {
    async fn execute(&self, params: JoinMatchParams) -> Result<MembershipStatus, MatchError> {
        let match_id = params.match_id;
        self.logger.info(&format!("Joining match: {}", match_id));

        // Unknown ids are ignored rather than rejected
        match self.repository.get_by_id(match_id).await {
            Ok(_) => {}
            Err(RepositoryError::NotFound) => {
                self.logger
                    .warn(&format!("Match {} is not in the catalog, ignoring join", match_id));
                return Ok(MembershipStatus {
                    match_id,
                    joined: self.store.is_joined(match_id),
                    change: None,
                });
            }
            Err(other) => return Err(MatchError::Repository(other)),
        }

        let added = self.store.join_match(match_id);
        self.logger.info(&format!(
            "Match {} joined{}",
            match_id,
            if added { "" } else { " (already joined)" }
        ));

        Ok(MembershipStatus {
            match_id,
            joined: true,
            change: Some(MembershipChange::Joined(match_id)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::membership::store::SessionMembershipStore;
    use crate::domain::matches::model::Match;
    use crate::domain::shared::value_objects::{MatchId, Sport};
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub MatchRepo {}

        #[async_trait]
        impl MatchRepository for MatchRepo {
            async fn get_all(&self) -> Result<Vec<Match>, RepositoryError>;
            async fn get_by_id(&self, id: MatchId) -> Result<Match, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn catalog_match(id: i64) -> Match {
        Match::from_repository(
            MatchId::new(id),
            Sport::Soccer,
            "Crissy Field".to_string(),
            "Presidio".to_string(),
            Utc::now(),
            8,
            14,
            "Jordan".to_string(),
            String::new(),
            String::new(),
        )
    }

    #[tokio::test]
    async fn should_join_match_in_catalog() {
        let mut mock_repo = MockMatchRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(catalog_match(id.value())));
        let store = Arc::new(SessionMembershipStore::new(mock_logger()));

        let use_case = JoinMatchUseCaseImpl {
            repository: Arc::new(mock_repo),
            store: store.clone(),
            logger: mock_logger(),
        };

        let status = use_case
            .execute(JoinMatchParams {
                match_id: MatchId::new(5),
            })
            .await
            .unwrap();

        assert!(status.joined);
        assert_eq!(status.change, Some(MembershipChange::Joined(MatchId::new(5))));
        assert!(store.is_joined(MatchId::new(5)));
    }

    #[tokio::test]
    async fn should_keep_single_membership_when_joining_twice() {
        let mut mock_repo = MockMatchRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(catalog_match(id.value())));
        let store = Arc::new(SessionMembershipStore::new(mock_logger()));

        let use_case = JoinMatchUseCaseImpl {
            repository: Arc::new(mock_repo),
            store: store.clone(),
            logger: mock_logger(),
        };

        for _ in 0..2 {
            let status = use_case
                .execute(JoinMatchParams {
                    match_id: MatchId::new(5),
                })
                .await
                .unwrap();
            assert!(status.joined);
        }

        assert_eq!(store.joined_ids().len(), 1);
    }

    #[tokio::test]
    async fn should_ignore_unknown_match() {
        let mut mock_repo = MockMatchRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let store = Arc::new(SessionMembershipStore::new(mock_logger()));

        let use_case = JoinMatchUseCaseImpl {
            repository: Arc::new(mock_repo),
            store: store.clone(),
            logger: mock_logger(),
        };

        let status = use_case
            .execute(JoinMatchParams {
                match_id: MatchId::new(-1),
            })
            .await
            .unwrap();

        assert!(!status.joined);
        assert!(status.change.is_none());
        assert!(store.joined_ids().is_empty());
    }

    #[tokio::test]
    async fn should_return_error_when_catalog_unavailable() {
        let mut mock_repo = MockMatchRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::Unavailable));
        let store = Arc::new(SessionMembershipStore::new(mock_logger()));

        let use_case = JoinMatchUseCaseImpl {
            repository: Arc::new(mock_repo),
            store: store.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(JoinMatchParams {
                match_id: MatchId::new(1),
            })
            .await;

        assert!(matches!(result, Err(MatchError::Repository(_))));
        assert!(store.joined_ids().is_empty());
    }
}
