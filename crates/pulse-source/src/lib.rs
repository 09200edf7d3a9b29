//! Pluggable data sources.
//!
//! The live coordinator only ever talks to the [`MetricSource`] and
//! [`DeltaSource`] traits, so the simulated random-walk implementations
//! here can be swapped for real feeds without touching the coordinator.

pub mod error;
pub mod simulated;
pub mod source;

pub use error::{SourceError, SourceResult};
pub use simulated::{PerfDeltaRoller, RandomWalkSource};
pub use source::{DeltaSource, MetricDelta, MetricSource};
