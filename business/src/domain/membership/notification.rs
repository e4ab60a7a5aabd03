use super::model::MembershipChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Default,
    Destructive,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Default => write!(f, "default"),
            Severity::Destructive => write!(f, "destructive"),
        }
    }
}

/// Human-readable event shown to the user after a join or leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn for_change(change: &MembershipChange) -> Self {
        match change {
            MembershipChange::Joined(_) => Self {
                title: "Match Joined!".to_string(),
                description: "You've successfully joined the match.".to_string(),
                severity: Severity::Default,
            },
            MembershipChange::Left(_) => Self {
                title: "Left Match".to_string(),
                description: "You have left the match.".to_string(),
                severity: Severity::Destructive,
            },
        }
    }
}
