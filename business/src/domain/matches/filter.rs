use crate::domain::shared::value_objects::Sport;

use super::model::Match;

/// Listing filter: optional sport plus a free-text search over location and district.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchFilter {
    pub sport: Option<Sport>,
    pub location: Option<String>,
}

impl MatchFilter {
    pub fn new(sport: Option<Sport>, location: Option<String>) -> Self {
        let location = location
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty());
        Self { sport, location }
    }

    pub fn matches(&self, candidate: &Match) -> bool {
        let sport_ok = self.sport.is_none_or(|sport| candidate.sport == sport);

        let location_ok = match &self.location {
            Some(needle) => {
                let needle = needle.to_lowercase();
                candidate.location.to_lowercase().contains(&needle)
                    || candidate.district.to_lowercase().contains(&needle)
            }
            None => true,
        };

        sport_ok && location_ok
    }
}
