//! pulse-dashboard - orchestration facade for the Pulse engine.
//!
//! Composes the store, metric sources, live coordinator, and
//! sanitization layer into the surface consumed by a presentation layer:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Dashboard                          │
//! │                                                          │
//! │  toggle_live / set_filters / refresh_data / ...          │
//! │        │ dispatch                                        │
//! │        ▼                                                 │
//! │  ┌──────────┐   watch    ┌──────────────────┐            │
//! │  │  Store   │◄───────────│ LiveCoordinator  │ one timer  │
//! │  └──────────┘  is_live   └────────┬─────────┘            │
//! │        ▲                          │ generate()           │
//! │        │ AddNotification          ▼                      │
//! │        │                 ┌─────────────────┐             │
//! │        └─────────────────│  MetricSources  │             │
//! │                          └────────┬────────┘             │
//! │                                   ▼                      │
//! │                        SlidingWindow (cap 20)            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! State resets on every session; there is no persistence and no wire
//! protocol.

pub mod config;
pub mod dashboard;
pub mod error;

pub use config::{AppConfig, SourceConfig};
pub use dashboard::Dashboard;
pub use error::{AppError, AppResult};
