//! Source traits and the delta event type.

use pulse_core::{MetricRecord, PerfMetric};

use crate::error::SourceResult;

/// A producer of metric points.
///
/// Implementations are synchronous and local: `generate` must return
/// within bounded time and performs no I/O in the simulated variants.
/// Failures are reported as errors, never panics; the coordinator logs
/// them at the tick boundary and keeps going.
pub trait MetricSource: Send {
    /// Display label of the series this source feeds.
    fn label(&self) -> &str;

    /// Produce the next metric point.
    fn generate(&mut self) -> SourceResult<MetricRecord>;
}

/// One performance-metric movement observed in a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDelta {
    /// The metric after the delta was applied.
    pub metric: PerfMetric,
    /// Signed change applied this tick.
    pub delta: f64,
}

/// A producer of performance-metric deltas.
///
/// Rolled once per tick; deltas above the significance threshold turn
/// into notifications.
pub trait DeltaSource: Send {
    fn roll(&mut self) -> Vec<MetricDelta>;
}
