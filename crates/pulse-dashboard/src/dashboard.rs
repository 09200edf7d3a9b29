//! The orchestration facade.
//!
//! Wires store, sources, coordinator, and sanitization together into the
//! shape a presentation layer consumes: synchronous dispatch methods with
//! no return values, plus reactive state reads.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;
use tracing::{info, warn};

use pulse_core::{MetricRecord, RawFilters, SlidingWindow, METRIC_WINDOW_CAPACITY};
use pulse_live::{
    CoordinatorHandle, LiveConfig, LiveCoordinator, SharedSources, SharedWindow,
};
use pulse_notify::export_complete;
use pulse_sanitize::{sanitize_filters, sanitize_text};
use pulse_source::{
    DeltaSource, MetricSource, PerfDeltaRoller, RandomWalkSource, SourceResult,
};
use pulse_store::{Action, DashboardState, Store};

use crate::config::AppConfig;

/// Facade over the dashboard engine.
///
/// Must be constructed inside a tokio runtime: creation spawns the live
/// coordinator task. State starts with `is_live = false`; nothing ticks
/// until [`Dashboard::toggle_live`] flips it.
pub struct Dashboard {
    store: Arc<Store>,
    window: SharedWindow,
    sources: SharedSources,
    coordinator: Option<CoordinatorHandle>,
}

impl Dashboard {
    /// Build a dashboard from configuration, using the simulated
    /// random-walk sources.
    pub fn new(config: &AppConfig) -> Self {
        let sources: Vec<Box<dyn MetricSource>> = config
            .effective_sources()
            .into_iter()
            .map(|sc| {
                let mut source = RandomWalkSource::new(sc.label, sc.start_value, sc.step);
                if let Some(category) = sc.category {
                    source = source.with_category(category);
                }
                Box::new(source) as Box<dyn MetricSource>
            })
            .collect();

        let deltas = Box::new(PerfDeltaRoller::new(
            PerfDeltaRoller::default_metrics(),
            config.delta_max_step,
        ));

        Self::with_sources(config.live.clone(), sources, deltas)
    }

    /// Build a dashboard with explicit sources, for tests or real feeds.
    pub fn with_sources(
        live: LiveConfig,
        sources: Vec<Box<dyn MetricSource>>,
        deltas: Box<dyn DeltaSource>,
    ) -> Self {
        let store = Arc::new(Store::new());
        let window: SharedWindow =
            Arc::new(RwLock::new(SlidingWindow::new(METRIC_WINDOW_CAPACITY)));
        let sources: SharedSources = Arc::new(Mutex::new(sources));

        let coordinator = LiveCoordinator::new(
            store.clone(),
            sources.clone(),
            deltas,
            window.clone(),
            live,
        )
        .spawn();

        let dashboard = Self {
            store,
            window,
            sources,
            coordinator: Some(coordinator),
        };
        dashboard.refresh_data();
        dashboard
    }

    /// Flip the live update flag.
    pub fn toggle_live(&self) {
        let live = self.store.state().is_live;
        self.store.dispatch(Action::SetLive(!live));
    }

    /// Sanitize raw filter input and install it.
    pub fn set_filters(&self, raw: &RawFilters) {
        self.store
            .dispatch(Action::SetFilters(sanitize_filters(raw)));
    }

    /// Drop all retained notifications.
    pub fn clear_notifications(&self) {
        self.store.dispatch(Action::ClearNotifications);
    }

    /// Acknowledge one notification. Unknown ids are a no-op.
    pub fn mark_notification_read(&self, id: &str) {
        self.store
            .dispatch(Action::MarkNotificationRead(id.to_string()));
    }

    /// Record a completed export as a notification.
    pub fn notify_export(&self, format: &str) {
        self.store
            .dispatch(Action::AddNotification(export_complete(format)));
    }

    /// Reload the initial dataset.
    ///
    /// Failures never propagate: they land in `state.error` and the
    /// caller retries by calling this again.
    pub fn refresh_data(&self) {
        self.store.dispatch(Action::SetLoading(true));
        match self.load_initial() {
            Ok(points) => {
                info!(points, "Initial data loaded");
                self.store.dispatch(Action::SetError(None));
            }
            Err(e) => {
                warn!(error = %e, "Initial data load failed");
                self.store.dispatch(Action::SetError(Some(e.to_string())));
            }
        }
        self.store.dispatch(Action::SetLoading(false));
    }

    fn load_initial(&self) -> SourceResult<usize> {
        let mut sources = self.sources.lock();
        let mut window = self.window.write();
        window.clear();

        let mut points = 0;
        for source in sources.iter_mut() {
            window.push(source.generate()?);
            points += 1;
        }
        Ok(points)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DashboardState {
        self.store.state()
    }

    /// Subscribe to post-dispatch state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.store.subscribe()
    }

    /// The retained metric points with display strings sanitized, oldest
    /// first.
    pub fn metric_window(&self) -> Vec<MetricRecord> {
        self.window
            .read()
            .iter()
            .map(|record| MetricRecord {
                timestamp: record.timestamp,
                value: record.value,
                label: sanitize_text(&record.label),
                category: record.category.as_deref().map(sanitize_text),
            })
            .collect()
    }

    /// Tear down the coordinator. After this resolves no further tick
    /// side effect is dispatched.
    pub async fn shutdown(mut self) {
        if let Some(coordinator) = self.coordinator.take() {
            coordinator.shutdown().await;
        }
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.store.state();
        f.debug_struct("Dashboard")
            .field("is_live", &state.is_live)
            .field("notifications", &state.notifications.len())
            .field("window_len", &self.window.read().len())
            .finish()
    }
}
