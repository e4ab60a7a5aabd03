use serde::{Deserialize, Serialize};

/// Identifier of a match in the catalog.
/// Any integer is accepted; unknown or negative ids are simply never joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(i64);

impl MatchId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MatchId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Closed set of sports supported by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Basketball,
    Soccer,
    Tennis,
}

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::Basketball, Sport::Soccer, Sport::Tennis];

    /// Exact, case-sensitive match on the canonical name. `FromStr` is the lenient form.
    pub fn from_name(name: &str) -> Option<Sport> {
        Sport::ALL.into_iter().find(|sport| sport.to_string() == name)
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sport::Basketball => write!(f, "Basketball"),
            Sport::Soccer => write!(f, "Soccer"),
            Sport::Tennis => write!(f, "Tennis"),
        }
    }
}

impl std::str::FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basketball" => Ok(Sport::Basketball),
            "soccer" => Ok(Sport::Soccer),
            "tennis" => Ok(Sport::Tennis),
            _ => Err(format!("Invalid sport: {}", s)),
        }
    }
}
