use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::shared::value_objects::MatchId;

use super::services::MembershipObserver;

/// Session-scoped owner of the membership state.
///
/// Join and leave are idempotent and never fail. Every call notifies the
/// subscribed observers, even when the set did not change.
pub trait MembershipStore: Send + Sync {
    fn is_joined(&self, match_id: MatchId) -> bool;
    /// Returns `true` when the match was added to the set.
    fn join_match(&self, match_id: MatchId) -> bool;
    /// Returns `true` when the match was removed from the set.
    fn leave_match(&self, match_id: MatchId) -> bool;
    fn joined_ids(&self) -> HashSet<MatchId>;
    fn subscribe(&self, observer: Arc<dyn MembershipObserver>);
}
