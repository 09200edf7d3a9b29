//! The live update coordinator.
//!
//! Owns exactly one interval timer. Ticks run only while the store's
//! `is_live` flag is set; flipping the flag never creates a second
//! interval, and cancelling the handle guarantees that no tick side
//! effect is dispatched afterwards.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use pulse_core::{MetricRecord, SlidingWindow};
use pulse_notify::{metric_change, random_event};
use pulse_source::{DeltaSource, MetricSource};
use pulse_store::{Action, Store};

use crate::config::LiveConfig;

/// Metric point window shared with the facade.
pub type SharedWindow = Arc<RwLock<SlidingWindow<MetricRecord>>>;

/// Metric sources shared with the facade (for initial loads and retries).
pub type SharedSources = Arc<Mutex<Vec<Box<dyn MetricSource>>>>;

/// Coordinates periodic data updates.
pub struct LiveCoordinator {
    store: Arc<Store>,
    sources: SharedSources,
    deltas: Box<dyn DeltaSource>,
    window: SharedWindow,
    config: LiveConfig,
    rng: StdRng,
}

impl LiveCoordinator {
    pub fn new(
        store: Arc<Store>,
        sources: SharedSources,
        deltas: Box<dyn DeltaSource>,
        window: SharedWindow,
        config: LiveConfig,
    ) -> Self {
        Self {
            store,
            sources,
            deltas,
            window,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Spawn the coordinator task.
    ///
    /// The returned handle is the only way to tear the task down; dropping
    /// it aborts nothing on its own.
    pub fn spawn(self) -> CoordinatorHandle {
        let token = CancellationToken::new();
        let child = token.child_token();
        let task = tokio::spawn(self.run(child));
        CoordinatorHandle { token, task }
    }

    async fn run(mut self, token: CancellationToken) {
        let mut state_rx = self.store.subscribe();
        let mut live = state_rx.borrow().is_live;

        let mut ticker =
            tokio::time::interval(Duration::from_millis(self.config.tick_interval_ms.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // An interval's first tick completes immediately; push it out so the
        // first update always lands a full period after go-live.
        ticker.reset();

        debug!(
            tick_interval_ms = self.config.tick_interval_ms,
            live, "Coordinator started"
        );

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Coordinator cancelled");
                    break;
                }
                changed = state_rx.changed() => {
                    if changed.is_err() {
                        // Store dropped; nothing left to coordinate.
                        break;
                    }
                    let next = state_rx.borrow_and_update().is_live;
                    if next && !live {
                        // Fresh period on go-live. A repeated SetLive(true)
                        // lands here as a non-transition and changes nothing,
                        // so starting is idempotent.
                        ticker.reset();
                        debug!("Live updates enabled");
                    } else if !next && live {
                        debug!("Live updates disabled");
                    }
                    live = next;
                }
                _ = ticker.tick(), if live => {
                    self.tick();
                }
            }
        }
    }

    /// Run one round of updates.
    ///
    /// A failed source is logged and skipped; a single failed tick never
    /// breaks subsequent ticks.
    fn tick(&mut self) {
        let mutate_p = self.config.mutate_probability.clamp(0.0, 1.0);

        {
            let mut sources = self.sources.lock();
            for source in sources.iter_mut() {
                if !self.rng.gen_bool(mutate_p) {
                    continue;
                }
                match source.generate() {
                    Ok(record) => {
                        trace!(label = %record.label, value = record.value, "Metric point");
                        self.window.write().push(record);
                    }
                    Err(e) => {
                        warn!(source = source.label(), error = %e, "Metric generation failed");
                    }
                }
            }
        }

        for movement in self.deltas.roll() {
            if movement.delta.abs() > self.config.significance_threshold {
                self.store.dispatch(Action::AddNotification(metric_change(
                    &movement.metric,
                    movement.delta,
                )));
            }
        }

        let event_p = self.config.event_probability.clamp(0.0, 1.0);
        if event_p > 0.0 && self.rng.gen_bool(event_p) {
            self.store
                .dispatch(Action::AddNotification(random_event(&mut self.rng)));
        }
    }
}

/// Handle for tearing down the coordinator task.
pub struct CoordinatorHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl CoordinatorHandle {
    /// Cancel the task and wait for it to finish.
    ///
    /// Once this resolves, no further tick side effect is dispatched.
    pub async fn shutdown(self) {
        self.token.cancel();
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;
    use pulse_core::{MetricRecord, PerfMetric, METRIC_WINDOW_CAPACITY, NOTIFICATION_CAP};
    use pulse_source::{MetricDelta, SourceError, SourceResult};

    struct CountingSource {
        calls: Arc<AtomicUsize>,
    }

    impl MetricSource for CountingSource {
        fn label(&self) -> &str {
            "counting"
        }

        fn generate(&mut self) -> SourceResult<MetricRecord> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(MetricRecord {
                timestamp: Utc::now(),
                value: n as f64,
                label: "counting".to_string(),
                category: None,
            })
        }
    }

    struct FailingSource;

    impl MetricSource for FailingSource {
        fn label(&self) -> &str {
            "failing"
        }

        fn generate(&mut self) -> SourceResult<MetricRecord> {
            Err(SourceError::Generation {
                label: "failing".to_string(),
                reason: "simulated outage".to_string(),
            })
        }
    }

    struct FixedDeltas {
        delta: f64,
    }

    impl DeltaSource for FixedDeltas {
        fn roll(&mut self) -> Vec<MetricDelta> {
            vec![MetricDelta {
                metric: PerfMetric::new("revenue", "Revenue", "$", 100.0),
                delta: self.delta,
            }]
        }
    }

    struct Harness {
        store: Arc<Store>,
        window: SharedWindow,
        calls: Arc<AtomicUsize>,
        handle: CoordinatorHandle,
    }

    fn start(delta: f64, extra_sources: Vec<Box<dyn MetricSource>>) -> Harness {
        let store = Arc::new(Store::new());
        let window: SharedWindow = Arc::new(RwLock::new(SlidingWindow::new(
            METRIC_WINDOW_CAPACITY,
        )));
        let calls = Arc::new(AtomicUsize::new(0));

        let mut sources: Vec<Box<dyn MetricSource>> = vec![Box::new(CountingSource {
            calls: calls.clone(),
        })];
        sources.extend(extra_sources);

        let config = LiveConfig {
            tick_interval_ms: 1_000,
            mutate_probability: 1.0,
            significance_threshold: 2.0,
            event_probability: 0.0,
        };

        let coordinator = LiveCoordinator::new(
            store.clone(),
            Arc::new(Mutex::new(sources)),
            Box::new(FixedDeltas { delta }),
            window.clone(),
            config,
        );
        let handle = coordinator.spawn();

        Harness {
            store,
            window,
            calls,
            handle,
        }
    }

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    async fn advance_ticks(n: u64) {
        for _ in 0..n {
            tokio::time::advance(Duration::from_millis(1_000)).await;
            settle().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_within_one_period_dispatches_nothing() {
        let h = start(5.0, vec![]);

        h.store.dispatch(Action::SetLive(true));
        settle().await;
        tokio::time::advance(Duration::from_millis(400)).await;
        settle().await;

        h.store.dispatch(Action::SetLive(false));
        settle().await;
        advance_ticks(10).await;

        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
        assert!(h.store.state().notifications.is_empty());
        h.handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_while_not_live() {
        let h = start(5.0, vec![]);

        advance_ticks(5).await;
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
        h.handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_start_is_idempotent() {
        let h = start(0.0, vec![]);

        h.store.dispatch(Action::SetLive(true));
        settle().await;
        h.store.dispatch(Action::SetLive(true));
        settle().await;

        tokio::time::advance(Duration::from_millis(1_100)).await;
        settle().await;

        // One interval, one tick: a second SetLive(true) must not stack
        // another timer.
        assert_eq!(h.calls.load(Ordering::SeqCst), 1);
        h.handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_fill_window_and_cap_notifications() {
        let h = start(5.0, vec![]);

        h.store.dispatch(Action::SetLive(true));
        settle().await;
        advance_ticks(30).await;

        let window = h.window.read();
        assert_eq!(window.len(), METRIC_WINDOW_CAPACITY);

        // Arrival order: the counting source emits increasing values.
        let values: Vec<f64> = window.iter().map(|r| r.value).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        drop(window);

        let state = h.store.state();
        assert_eq!(state.notifications.len(), NOTIFICATION_CAP);
        assert_eq!(state.notifications[0].title, "Revenue Increased");
        assert_eq!(state.notifications[0].message, "Revenue rose by 5.0$");

        h.handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_insignificant_deltas_make_no_notifications() {
        let h = start(1.5, vec![]);

        h.store.dispatch(Action::SetLive(true));
        settle().await;
        advance_ticks(5).await;

        assert!(h.calls.load(Ordering::SeqCst) >= 4);
        assert!(h.store.state().notifications.is_empty());
        h.handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_source_never_stops_the_interval() {
        let h = start(5.0, vec![Box::new(FailingSource)]);

        h.store.dispatch(Action::SetLive(true));
        settle().await;
        advance_ticks(3).await;

        // The healthy source kept generating alongside the failing one.
        assert_eq!(h.calls.load(Ordering::SeqCst), 3);
        assert!(!h.store.state().notifications.is_empty());
        h.handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_after_shutdown() {
        let h = start(5.0, vec![]);

        h.store.dispatch(Action::SetLive(true));
        settle().await;
        advance_ticks(2).await;
        let before = h.calls.load(Ordering::SeqCst);
        assert_eq!(before, 2);

        h.handle.shutdown().await;
        advance_ticks(5).await;

        assert_eq!(h.calls.load(Ordering::SeqCst), before);
    }
}
