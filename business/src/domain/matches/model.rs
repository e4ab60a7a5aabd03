use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{MatchId, Sport};

/// A scheduled sports session from the catalog. Never mutated by this service.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: MatchId,
    pub sport: Sport,
    pub location: String,
    pub district: String,
    pub date_time: DateTime<Utc>,
    pub players_joined: u32,
    pub players_needed: u32,
    pub organizer: String,
    pub avatar: String,
    pub image: String,
}

impl Match {
    /// Constructor for catalog data (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: MatchId,
        sport: Sport,
        location: String,
        district: String,
        date_time: DateTime<Utc>,
        players_joined: u32,
        players_needed: u32,
        organizer: String,
        avatar: String,
        image: String,
    ) -> Self {
        Self {
            id,
            sport,
            location,
            district,
            date_time,
            players_joined,
            players_needed,
            organizer,
            avatar,
            image,
        }
    }

    pub fn spots_left(&self) -> u32 {
        self.players_needed.saturating_sub(self.players_joined)
    }

    /// Share of the needed players already in, between 0.0 and 1.0.
    pub fn fill_ratio(&self) -> f64 {
        if self.players_needed == 0 {
            return 0.0;
        }
        (f64::from(self.players_joined) / f64::from(self.players_needed)).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_match(joined: u32, needed: u32) -> Match {
        Match::from_repository(
            MatchId::new(1),
            Sport::Basketball,
            "Mission Dolores Park".to_string(),
            "Mission".to_string(),
            Utc.with_ymd_and_hms(2026, 10, 24, 18, 0, 0).unwrap(),
            joined,
            needed,
            "Alex".to_string(),
            "https://i.pravatar.cc/150?u=alex".to_string(),
            "https://placehold.co/600x400.png".to_string(),
        )
    }

    #[test]
    fn should_compute_spots_left() {
        assert_eq!(sample_match(6, 10).spots_left(), 4);
    }

    #[test]
    fn should_not_underflow_when_overbooked() {
        assert_eq!(sample_match(12, 10).spots_left(), 0);
        assert_eq!(sample_match(12, 10).fill_ratio(), 1.0);
    }

    #[test]
    fn should_compute_fill_ratio() {
        assert_eq!(sample_match(5, 10).fill_ratio(), 0.5);
    }

    #[test]
    fn should_report_zero_ratio_when_no_players_needed() {
        assert_eq!(sample_match(0, 0).fill_ratio(), 0.0);
    }
}
