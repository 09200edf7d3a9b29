//! Reactive store handle.
//!
//! Wraps the reducer behind a lock and republishes each post-dispatch
//! state on a watch channel. Consumers never mutate state directly; they
//! dispatch actions and read snapshots.

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::trace;

use crate::state::{reduce, Action, DashboardState};

/// Shared handle to the dashboard state.
pub struct Store {
    state: RwLock<DashboardState>,
    tx: watch::Sender<DashboardState>,
}

impl Store {
    /// Create a store holding the default initial state.
    pub fn new() -> Self {
        Self::with_state(DashboardState::default())
    }

    /// Create a store with an explicit initial state.
    pub fn with_state(initial: DashboardState) -> Self {
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            state: RwLock::new(initial),
            tx,
        }
    }

    /// Apply an action through the reducer and publish the result.
    ///
    /// Synchronous; no return value. Publishing ignores the no-receiver
    /// case (normal when nothing is subscribed yet).
    pub fn dispatch(&self, action: Action) {
        let mut guard = self.state.write();
        trace!(?action, "Dispatching action");
        let next = reduce(std::mem::take(&mut *guard), action);
        *guard = next;
        // Publish while still holding the write lock so publish order
        // always matches reduce order; a publish outside the lock could
        // race a concurrent dispatch and leave the channel holding the
        // older snapshot. send_replace stores the value even with no
        // receivers, so late subscribers always start from the latest
        // state.
        self.tx.send_replace(guard.clone());
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DashboardState {
        self.state.read().clone()
    }

    /// Subscribe to post-dispatch state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Store")
            .field("is_live", &state.is_live)
            .field("notifications", &state.notifications.len())
            .field("is_loading", &state.is_loading)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::{Notification, NotificationKind};

    #[test]
    fn test_dispatch_updates_snapshot() {
        let store = Store::new();
        assert!(!store.state().is_live);

        store.dispatch(Action::SetLive(true));
        assert!(store.state().is_live);
    }

    #[tokio::test]
    async fn test_subscribers_see_post_dispatch_state() {
        let store = Store::new();
        let mut rx = store.subscribe();

        store.dispatch(Action::AddNotification(Notification::new(
            NotificationKind::Success,
            "Sync Complete",
            "All data sources are up to date",
        )));

        rx.changed().await.unwrap();
        let state = rx.borrow();
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].title, "Sync Complete");
    }

    #[test]
    fn test_concurrent_dispatches_all_apply() {
        use std::sync::Arc;

        let store = Arc::new(Store::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.dispatch(Action::SetLoading(true));
                        store.dispatch(Action::SetLoading(false));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert!(!store.state().is_loading);
    }

    #[test]
    fn test_watch_never_lags_locked_state() {
        use std::sync::Arc;

        let store = Arc::new(Store::new());
        let rx = store.subscribe();

        // Contended flips from several threads; after every join point the
        // channel must hold the same snapshot as the lock-guarded state,
        // which only holds when publish order matches reduce order.
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for n in 0..5_000 {
                        store.dispatch(Action::SetLive((n + i) % 2 == 0));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(*rx.borrow(), store.state());
    }
}
