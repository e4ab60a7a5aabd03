use std::collections::HashSet;

use futures_util::stream::{BoxStream, StreamExt};
use futures_util::future;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use business::domain::membership::model::MembershipChange;
use business::domain::membership::services::MembershipObserver;
use business::domain::shared::value_objects::MatchId;

use crate::api::membership::dto::MembershipEventResponse;

const DEFAULT_CAPACITY: usize = 64;

/// Store observer that fans membership changes out to connected event streams.
///
/// Slow subscribers skip the events they lagged behind on.
pub struct MembershipEventBroadcaster {
    sender: broadcast::Sender<MembershipEventResponse>,
}

impl MembershipEventBroadcaster {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> BoxStream<'static, MembershipEventResponse> {
        BroadcastStream::new(self.sender.subscribe())
            .filter_map(|event| future::ready(event.ok()))
            .boxed()
    }
}

impl Default for MembershipEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl MembershipObserver for MembershipEventBroadcaster {
    fn on_change(&self, change: &MembershipChange, joined_ids: &HashSet<MatchId>) {
        // No subscribers is not an error
        if self.sender.receiver_count() == 0 {
            return;
        }
        let event = MembershipEventResponse::from_change(change, joined_ids);
        if self.sender.send(event).is_err() {
            tracing::debug!(match_id = %change.match_id(), "Membership event dropped, no subscribers");
        }
    }
}
