use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::matches::errors::MatchError;
use crate::domain::matches::model::Match;
use crate::domain::matches::repository::MatchRepository;
use crate::domain::matches::use_cases::get_all::{GetAllMatchesParams, GetAllMatchesUseCase};

pub struct GetAllMatchesUseCaseImpl {
    pub repository: Arc<dyn MatchRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllMatchesUseCase for GetAllMatchesUseCaseImpl {
    async fn execute(&self, params: GetAllMatchesParams) -> Result<Vec<Match>, MatchError> {
        self.logger
            .info(&format!("Listing matches with filter: {:?}", params.filter));

        let matches: Vec<Match> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter(|m| params.filter.matches(m))
            .collect();

        self.logger
            .info(&format!("Listed {} matches", matches.len()));
        Ok(matches)
    }
}
