//! Real-time update coordination.
//!
//! One task, one interval, tied to the store's `is_live` flag. Each tick
//! pulls fresh points from the metric sources, rolls performance deltas,
//! and turns significant movements into notifications. Teardown is
//! deterministic: after `shutdown()` resolves, no tick side effect is
//! dispatched.

pub mod config;
pub mod coordinator;

pub use config::LiveConfig;
pub use coordinator::{CoordinatorHandle, LiveCoordinator, SharedSources, SharedWindow};
