use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::domain::logger::Logger;
use crate::domain::membership::model::{MembershipChange, MembershipState};
use crate::domain::membership::services::MembershipObserver;
use crate::domain::membership::store::MembershipStore;
use crate::domain::shared::value_objects::MatchId;

/// In-memory membership store, created once per session and shared by handle.
///
/// Mutation and observer dispatch run under one `dispatch` lock, so observers
/// see changes in the order they were applied. The state lock is released
/// before dispatch: observers may query the store but must not mutate it.
pub struct SessionMembershipStore {
    dispatch: Mutex<()>,
    state: RwLock<MembershipState>,
    observers: RwLock<Vec<Arc<dyn MembershipObserver>>>,
    logger: Arc<dyn Logger>,
}

impl SessionMembershipStore {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            dispatch: Mutex::new(()),
            state: RwLock::new(MembershipState::new()),
            observers: RwLock::new(Vec::new()),
            logger,
        }
    }

    fn apply(&self, change: MembershipChange) -> bool {
        let _dispatch = self.dispatch.lock().unwrap_or_else(PoisonError::into_inner);

        let (changed, snapshot) = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let changed = match change {
                MembershipChange::Joined(id) => state.join(id),
                MembershipChange::Left(id) => state.leave(id),
            };
            (changed, state.joined_ids().clone())
        };

        self.logger.debug(&format!(
            "Membership {:?} applied (changed: {}, joined: {})",
            change,
            changed,
            snapshot.len()
        ));

        let observers = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer.on_change(&change, &snapshot);
        }

        changed
    }
}

impl MembershipStore for SessionMembershipStore {
    fn is_joined(&self, match_id: MatchId) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_joined(match_id)
    }

    fn join_match(&self, match_id: MatchId) -> bool {
        self.apply(MembershipChange::Joined(match_id))
    }

    fn leave_match(&self, match_id: MatchId) -> bool {
        self.apply(MembershipChange::Left(match_id))
    }

    fn joined_ids(&self) -> HashSet<MatchId> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .joined_ids()
            .clone()
    }

    fn subscribe(&self, observer: Arc<dyn MembershipObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }
}
