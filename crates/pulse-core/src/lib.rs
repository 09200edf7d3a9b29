//! Core domain types for the Pulse dashboard engine.
//!
//! This crate provides the fundamental types used throughout the system:
//! - `Notification`: dashboard notification records with severity kinds
//! - `Filters` / `DateRange`: user-supplied filter state
//! - `MetricRecord` / `PerfMetric`: generated data points
//! - `SlidingWindow`: fixed-capacity buffer with oldest-first eviction

pub mod error;
pub mod types;
pub mod window;

pub use error::{CoreError, Result};
pub use types::{
    DateRange, Filters, MetricRecord, Notification, NotificationKind, PerfMetric, RawFilters,
    METRIC_WINDOW_CAPACITY, NOTIFICATION_CAP,
};
pub use window::SlidingWindow;
