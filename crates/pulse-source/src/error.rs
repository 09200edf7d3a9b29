//! Error types for pulse-source.

use thiserror::Error;

/// Source error types.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Generation failed for '{label}': {reason}")]
    Generation { label: String, reason: String },

    #[error("Source '{0}' is exhausted")]
    Exhausted(String),
}

/// Result type alias for source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
