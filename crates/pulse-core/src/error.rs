//! Error types for pulse-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
