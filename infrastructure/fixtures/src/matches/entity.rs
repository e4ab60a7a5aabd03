use chrono::{DateTime, Utc};
use serde::Deserialize;

use business::domain::matches::model::Match;
use business::domain::shared::value_objects::{MatchId, Sport};

use crate::source::FixtureError;

/// One match record as stored in the fixture file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntity {
    pub id: i64,
    pub sport: String,
    pub location: String,
    pub district: String,
    pub date_time: DateTime<Utc>,
    pub players_joined: u32,
    pub players_needed: u32,
    pub organizer: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub image: String,
}

impl MatchEntity {
    pub fn into_domain(self) -> Result<Match, FixtureError> {
        let sport = self
            .sport
            .parse::<Sport>()
            .map_err(|_| FixtureError::InvalidRecord(self.id))?;

        Ok(Match::from_repository(
            MatchId::new(self.id),
            sport,
            self.location,
            self.district,
            self.date_time,
            self.players_joined,
            self.players_needed,
            self.organizer,
            self.avatar,
            self.image,
        ))
    }
}
