use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::membership::model::MembershipChange;
use crate::domain::membership::notification::Notification;
use crate::domain::membership::services::{MembershipObserver, Notifier};
use crate::domain::shared::value_objects::MatchId;

/// Turns membership changes into user notifications.
pub struct NotifyingObserver {
    notifier: Arc<dyn Notifier>,
}

impl NotifyingObserver {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

impl MembershipObserver for NotifyingObserver {
    fn on_change(&self, change: &MembershipChange, _joined_ids: &HashSet<MatchId>) {
        self.notifier.notify(Notification::for_change(change));
    }
}
