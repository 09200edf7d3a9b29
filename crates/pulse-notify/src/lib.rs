//! Pure notification constructors.
//!
//! Each builder maps an event (a metric delta, an export completion, a
//! simulated system event) to a [`Notification`] record. No side effects;
//! the store reducer owns retention and eviction.

pub mod builder;

pub use builder::{export_complete, metric_change, random_event};
