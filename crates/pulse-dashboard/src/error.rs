//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] pulse_telemetry::TelemetryError),

    #[error("Source error: {0}")]
    Source(#[from] pulse_source::SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
