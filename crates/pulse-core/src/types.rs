//! Domain types shared across the dashboard engine.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Maximum number of notifications retained in state.
pub const NOTIFICATION_CAP: usize = 10;

/// Capacity of the metric point sliding window.
pub const METRIC_WINDOW_CAPACITY: usize = 20;

/// Notification severity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A dashboard notification record.
///
/// Created by the notification builders, appended by the store reducer,
/// and evicted oldest-first once the retained count exceeds
/// [`NOTIFICATION_CAP`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id: generation-time millis plus random suffix.
    pub id: String,
    /// Severity kind.
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Full message body.
    pub message: String,
    /// Creation timestamp.
    pub timestamp: DateTime<Utc>,
    /// Whether the user has acknowledged this notification.
    pub is_read: bool,
}

impl Notification {
    /// Create a new unread notification with a generated id.
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let id = format!("ntf_{}_{}", now.timestamp_millis(), Uuid::new_v4().simple());

        Self {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: now,
            is_read: false,
        }
    }
}

/// Reporting period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "custom")]
    Custom,
}

impl DateRange {
    /// Lenient parse: anything outside the fixed vocabulary coerces to
    /// the default (`Today`). Invalid filter input is never an error.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::Last90Days => "90d",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for DateRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "7d" => Ok(Self::Last7Days),
            "30d" => Ok(Self::Last30Days),
            "90d" => Ok(Self::Last90Days),
            "custom" => Ok(Self::Custom),
            other => Err(CoreError::InvalidDateRange(other.to_string())),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated filter state held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub category: BTreeSet<String>,
    #[serde(default)]
    pub region: BTreeSet<String>,
    #[serde(default)]
    pub user_type: BTreeSet<String>,
}

/// Raw, user-supplied filter input before sanitization.
///
/// Everything is stringly typed at this boundary; the sanitization layer
/// turns it into validated [`Filters`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFilters {
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub region: Vec<String>,
    #[serde(default)]
    pub user_type: Vec<String>,
}

/// A single generated metric point.
///
/// Transient: no identity beyond position in its containing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Generation timestamp.
    pub timestamp: DateTime<Utc>,
    /// Point value.
    pub value: f64,
    /// Display label.
    pub label: String,
    /// Optional grouping category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A tracked performance metric (revenue, active users, ...).
///
/// The delta roller mutates `value` each tick; significant deltas turn
/// into notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfMetric {
    /// Stable key, e.g. "revenue".
    pub key: String,
    /// Display title, e.g. "Revenue".
    pub title: String,
    /// Unit suffix appended to formatted values, e.g. "$" or "%".
    pub unit: String,
    /// Current value.
    pub value: f64,
}

impl PerfMetric {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        unit: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            unit: unit.into(),
            value,
        }
    }
}
