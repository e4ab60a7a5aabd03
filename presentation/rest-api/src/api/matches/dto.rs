use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::matches::model::Match;
use business::domain::shared::value_objects::Sport;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum SportDto {
    Basketball,
    Soccer,
    Tennis,
}

impl From<Sport> for SportDto {
    fn from(sport: Sport) -> Self {
        match sport {
            Sport::Basketball => SportDto::Basketball,
            Sport::Soccer => SportDto::Soccer,
            Sport::Tennis => SportDto::Tennis,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MatchResponse {
    pub id: i64,
    pub sport: SportDto,
    /// Venue name
    pub location: String,
    pub district: String,
    pub date_time: DateTime<Utc>,
    pub players_joined: u32,
    pub players_needed: u32,
    /// Open places, never negative
    pub spots_left: u32,
    /// Share of needed players already in, 0.0 to 1.0
    pub fill_ratio: f64,
    pub organizer: String,
    pub avatar: String,
    pub image: String,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        Self {
            id: m.id.value(),
            sport: m.sport.into(),
            spots_left: m.spots_left(),
            fill_ratio: m.fill_ratio(),
            location: m.location,
            district: m.district,
            date_time: m.date_time,
            players_joined: m.players_joined,
            players_needed: m.players_needed,
            organizer: m.organizer,
            avatar: m.avatar,
            image: m.image,
        }
    }
}
