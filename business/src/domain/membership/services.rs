use std::collections::HashSet;

use crate::domain::shared::value_objects::MatchId;

use super::model::MembershipChange;
use super::notification::Notification;

/// Consumer told about every join or leave.
///
/// Observers receive the raw change plus the current snapshot and derive
/// their own views from it.
pub trait MembershipObserver: Send + Sync {
    fn on_change(&self, change: &MembershipChange, joined_ids: &HashSet<MatchId>);
}

/// Outbound port for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
