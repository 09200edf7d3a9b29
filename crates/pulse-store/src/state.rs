//! State aggregate, actions, and the pure reducer.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use pulse_core::{Filters, Notification, NOTIFICATION_CAP};

/// The single owned state aggregate.
///
/// Created once per session; mutated only by [`reduce`]. Not persisted
/// across sessions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardState {
    /// Whether the live update timer is active.
    pub is_live: bool,
    /// Current validated filter selection.
    pub filters: Filters,
    /// Retained notifications, newest first, capped at [`NOTIFICATION_CAP`].
    pub notifications: VecDeque<Notification>,
    /// Whether an initial data load is in progress.
    pub is_loading: bool,
    /// Last initialization error, if any.
    pub error: Option<String>,
}

impl DashboardState {
    /// Count of notifications not yet acknowledged.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }
}

/// Typed state mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLive(bool),
    SetFilters(Filters),
    AddNotification(Notification),
    ClearNotifications,
    MarkNotificationRead(String),
    SetLoading(bool),
    SetError(Option<String>),
}

/// Apply an action to the state, producing the next state.
///
/// Never panics. `AddNotification` prepends and then truncates to the cap
/// unconditionally, so the length invariant holds after every call, not
/// just on overflow. `MarkNotificationRead` with an unknown id is a no-op.
pub fn reduce(mut state: DashboardState, action: Action) -> DashboardState {
    match action {
        Action::SetLive(live) => {
            state.is_live = live;
        }
        Action::SetFilters(filters) => {
            state.filters = filters;
        }
        Action::AddNotification(notification) => {
            state.notifications.push_front(notification);
            state.notifications.truncate(NOTIFICATION_CAP);
        }
        Action::ClearNotifications => {
            state.notifications.clear();
        }
        Action::MarkNotificationRead(id) => {
            if let Some(n) = state.notifications.iter_mut().find(|n| n.id == id) {
                n.is_read = true;
            }
        }
        Action::SetLoading(loading) => {
            state.is_loading = loading;
        }
        Action::SetError(error) => {
            state.error = error;
        }
    }
    state
}
