// ── Store handle ──
//
// Owns the current `AppState` behind a watch channel. Every dispatch
// publishes a new snapshot; readers never observe a half-applied action.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::action::Action;
use super::reducer::transition;
use super::state::AppState;
use super::stream::StateStream;

/// Cloneable handle to the application state.
///
/// Clones share the same state. Dispatches are serialized by the
/// channel, so concurrent callers each see a consistent before/after.
#[derive(Clone)]
pub struct Store {
    sender: Arc<watch::Sender<Arc<AppState>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (sender, _) = watch::channel(Arc::new(state));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Run `action` through the reducer and publish the result.
    pub fn dispatch(&self, action: Action) {
        debug!(action = action.kind(), "dispatch");
        // `send_modify` notifies even without live receivers.
        self.sender.send_modify(|slot| {
            let current = std::mem::take(slot);
            *slot = Arc::new(transition(Arc::unwrap_or_clone(current), action));
        });
    }

    /// Current state.
    pub fn snapshot(&self) -> Arc<AppState> {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.sender.subscribe())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.snapshot();
        f.debug_struct("Store")
            .field("lifecycle", &state.lifecycle)
            .field("boards", &state.entities.boards.len())
            .field("selected_board_id", &state.selected_board_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoardId, UserId};
    use crate::store::Lifecycle;

    #[test]
    fn dispatch_publishes_new_snapshot() {
        let store = Store::new();
        let before = store.snapshot();
        store.dispatch(Action::BootstrapStart);
        let after = store.snapshot();

        assert_eq!(before.lifecycle, Lifecycle::Idle);
        assert_eq!(after.lifecycle, Lifecycle::Loading);
    }

    #[test]
    fn clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        other.dispatch(Action::SetUser {
            user_id: UserId(3),
            user_name: "cy".into(),
        });
        assert_eq!(store.snapshot().user_id, Some(UserId(3)));
    }

    #[tokio::test]
    async fn subscribers_see_each_change() {
        let store = Store::new();
        let mut sub = store.subscribe();
        assert_eq!(sub.current().lifecycle, Lifecycle::Idle);

        store.dispatch(Action::SelectBoard(BoardId(4)));
        let snap = sub.changed().await.unwrap_or_default();
        assert_eq!(snap.selected_board_id, Some(BoardId(4)));
        assert_eq!(sub.latest().selected_board_id, Some(BoardId(4)));
    }

    #[tokio::test]
    async fn changed_ends_when_store_dropped() {
        let store = Store::new();
        let mut sub = store.subscribe();
        drop(store);
        assert!(sub.changed().await.is_none());
    }
}
