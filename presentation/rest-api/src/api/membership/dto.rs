use std::collections::HashSet;

use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::membership::model::{MembershipChange, MembershipStatus};
use business::domain::membership::notification::{Notification, Severity};
use business::domain::shared::value_objects::MatchId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum SeverityDto {
    #[oai(rename = "default")]
    Default,
    #[oai(rename = "destructive")]
    Destructive,
}

impl From<Severity> for SeverityDto {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Default => SeverityDto::Default,
            Severity::Destructive => SeverityDto::Destructive,
        }
    }
}

/// Toast-style message for the client to display
#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    pub title: String,
    pub description: String,
    pub severity: SeverityDto,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            title: n.title,
            description: n.description,
            severity: n.severity.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MembershipStatusResponse {
    pub match_id: i64,
    pub joined: bool,
    /// Present when the call was a join or leave that the store applied
    #[oai(skip_serializing_if_is_none)]
    pub notification: Option<NotificationResponse>,
}

impl From<MembershipStatus> for MembershipStatusResponse {
    fn from(status: MembershipStatus) -> Self {
        Self {
            match_id: status.match_id.value(),
            joined: status.joined,
            notification: status
                .change
                .map(|change| Notification::for_change(&change).into()),
        }
    }
}

/// One membership change as pushed on the event stream.
#[derive(Debug, Clone, Object)]
pub struct MembershipEventResponse {
    pub match_id: i64,
    pub joined: bool,
    /// Every joined match id after the change, ascending
    pub joined_ids: Vec<i64>,
    pub notification: NotificationResponse,
}

impl MembershipEventResponse {
    pub fn from_change(change: &MembershipChange, joined_ids: &HashSet<MatchId>) -> Self {
        let mut ids: Vec<i64> = joined_ids.iter().map(|id| id.value()).collect();
        ids.sort_unstable();

        Self {
            match_id: change.match_id().value(),
            joined: change.is_joined(),
            joined_ids: ids,
            notification: Notification::for_change(change).into(),
        }
    }
}
