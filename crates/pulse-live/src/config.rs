//! Coordinator configuration.

use serde::{Deserialize, Serialize};

/// Live update configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Tick period in milliseconds. One canonical constant for the whole
    /// system.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Probability that a given source produces a point on a tick.
    /// Simulates partial updates; clamped to [0, 1] at use.
    #[serde(default = "default_mutate_probability")]
    pub mutate_probability: f64,
    /// Absolute delta above which a metric movement becomes a
    /// notification.
    #[serde(default = "default_significance_threshold")]
    pub significance_threshold: f64,
    /// Per-tick probability of a decorative system event notification.
    #[serde(default = "default_event_probability")]
    pub event_probability: f64,
}

fn default_tick_interval_ms() -> u64 {
    2_000
}

fn default_mutate_probability() -> f64 {
    0.7
}

fn default_significance_threshold() -> f64 {
    2.0
}

fn default_event_probability() -> f64 {
    0.05
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            mutate_probability: default_mutate_probability(),
            significance_threshold: default_significance_threshold(),
            event_probability: default_event_probability(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LiveConfig::default();
        assert_eq!(config.tick_interval_ms, 2_000);
        assert!(config.mutate_probability > 0.0 && config.mutate_probability <= 1.0);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: LiveConfig = toml::from_str("tick_interval_ms = 500").unwrap();
        assert_eq!(config.tick_interval_ms, 500);
        assert_eq!(config.significance_threshold, 2.0);
        assert_eq!(config.event_probability, 0.05);
    }
}
