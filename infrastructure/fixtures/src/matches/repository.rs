use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::matches::model::Match;
use business::domain::matches::repository::MatchRepository;
use business::domain::shared::value_objects::MatchId;

use crate::source::{FixtureError, FixtureSource, load_matches};

/// Match catalog held in memory for the life of the process.
pub struct StaticMatchRepository {
    matches: Vec<Match>,
}

impl StaticMatchRepository {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn load(source: &FixtureSource) -> Result<Self, FixtureError> {
        Ok(Self::new(load_matches(source)?))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[async_trait]
impl MatchRepository for StaticMatchRepository {
    async fn get_all(&self) -> Result<Vec<Match>, RepositoryError> {
        Ok(self.matches.clone())
    }

    async fn get_by_id(&self, id: MatchId) -> Result<Match, RepositoryError> {
        self.matches
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}
