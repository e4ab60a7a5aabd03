use std::collections::HashSet;

use crate::domain::shared::value_objects::MatchId;

/// The set of matches the current user has joined during this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipState {
    joined_ids: HashSet<MatchId>,
}

impl MembershipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_joined(&self, match_id: MatchId) -> bool {
        self.joined_ids.contains(&match_id)
    }

    /// Returns `true` when the match was not joined before.
    pub fn join(&mut self, match_id: MatchId) -> bool {
        self.joined_ids.insert(match_id)
    }

    /// Returns `true` when the match was joined before.
    pub fn leave(&mut self, match_id: MatchId) -> bool {
        self.joined_ids.remove(&match_id)
    }

    pub fn joined_ids(&self) -> &HashSet<MatchId> {
        &self.joined_ids
    }

    pub fn len(&self) -> usize {
        self.joined_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joined_ids.is_empty()
    }
}

/// Raw membership fact handed to observers after every join or leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    Joined(MatchId),
    Left(MatchId),
}

impl MembershipChange {
    pub fn match_id(&self) -> MatchId {
        match self {
            MembershipChange::Joined(id) | MembershipChange::Left(id) => *id,
        }
    }

    pub fn is_joined(&self) -> bool {
        matches!(self, MembershipChange::Joined(_))
    }
}

/// Membership of one match as reported back to the caller.
/// `change` is `None` for plain queries and for ignored operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipStatus {
    pub match_id: MatchId,
    pub joined: bool,
    pub change: Option<MembershipChange>,
}
