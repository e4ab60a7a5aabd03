use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::matches::errors::MatchError;
use crate::domain::matches::model::Match;
use crate::domain::matches::repository::MatchRepository;
use crate::domain::matches::use_cases::get_joined::GetJoinedMatchesUseCase;
use crate::domain::membership::store::MembershipStore;

/// Derives the "my matches" view from the catalog and the membership snapshot.
pub struct GetJoinedMatchesUseCaseImpl {
    pub repository: Arc<dyn MatchRepository>,
    pub store: Arc<dyn MembershipStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetJoinedMatchesUseCase for GetJoinedMatchesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Match>, MatchError> {
        self.logger.info("Getting joined matches");

        let joined_ids = self.store.joined_ids();
        if joined_ids.is_empty() {
            return Ok(vec![]);
        }

        let matches: Vec<Match> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter(|m| joined_ids.contains(&m.id))
            .collect();

        self.logger
            .info(&format!("Retrieved {} joined matches", matches.len()));
        Ok(matches)
    }
}
