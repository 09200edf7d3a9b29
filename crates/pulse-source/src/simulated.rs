//! Simulated sources.
//!
//! Random walks stand in for real feeds. Values stay non-negative and
//! every generator can be seeded for deterministic tests.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pulse_core::{MetricRecord, PerfMetric};

use crate::error::SourceResult;
use crate::source::{DeltaSource, MetricDelta, MetricSource};

/// A metric series that moves by a bounded random step each generation.
#[derive(Debug)]
pub struct RandomWalkSource {
    label: String,
    category: Option<String>,
    value: f64,
    step: f64,
    rng: StdRng,
}

impl RandomWalkSource {
    /// Create a source starting at `start` moving at most `step` per
    /// generation.
    pub fn new(label: impl Into<String>, start: f64, step: f64) -> Self {
        Self {
            label: label.into(),
            category: None,
            value: start.max(0.0),
            step: step.abs(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(label: impl Into<String>, start: f64, step: f64, seed: u64) -> Self {
        let mut source = Self::new(label, start, step);
        source.rng = StdRng::seed_from_u64(seed);
        source
    }

    /// Attach a grouping category to generated records.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl MetricSource for RandomWalkSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn generate(&mut self) -> SourceResult<MetricRecord> {
        let delta = if self.step > 0.0 {
            self.rng.gen_range(-self.step..self.step)
        } else {
            0.0
        };
        self.value = (self.value + delta).max(0.0);

        Ok(MetricRecord {
            timestamp: Utc::now(),
            value: self.value,
            label: self.label.clone(),
            category: self.category.clone(),
        })
    }
}

/// Rolls a bounded random delta onto each tracked performance metric.
#[derive(Debug)]
pub struct PerfDeltaRoller {
    metrics: Vec<PerfMetric>,
    max_step: f64,
    rng: StdRng,
}

impl PerfDeltaRoller {
    pub fn new(metrics: Vec<PerfMetric>, max_step: f64) -> Self {
        Self {
            metrics,
            max_step: max_step.abs(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(metrics: Vec<PerfMetric>, max_step: f64, seed: u64) -> Self {
        let mut roller = Self::new(metrics, max_step);
        roller.rng = StdRng::seed_from_u64(seed);
        roller
    }

    /// The default performance-metric set tracked by the dashboard.
    pub fn default_metrics() -> Vec<PerfMetric> {
        vec![
            PerfMetric::new("revenue", "Revenue", "$", 1250.0),
            PerfMetric::new("active_users", "Active Users", "", 840.0),
            PerfMetric::new("conversion_rate", "Conversion Rate", "%", 3.2),
            PerfMetric::new("avg_session", "Avg Session", "min", 6.5),
        ]
    }

    /// Current metric values.
    pub fn metrics(&self) -> &[PerfMetric] {
        &self.metrics
    }
}

impl DeltaSource for PerfDeltaRoller {
    fn roll(&mut self) -> Vec<MetricDelta> {
        self.metrics
            .iter_mut()
            .map(|metric| {
                let delta = if self.max_step > 0.0 {
                    self.rng.gen_range(-self.max_step..self.max_step)
                } else {
                    0.0
                };
                metric.value = (metric.value + delta).max(0.0);
                MetricDelta {
                    metric: metric.clone(),
                    delta,
                }
            })
            .collect()
    }
}
