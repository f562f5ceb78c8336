//! Error types for warclock

use thiserror::Error;

use crate::Timestamp;

/// Core warclock errors
#[derive(Error, Debug)]
pub enum WarclockError {
    // Input errors
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Start instant {start} is after current instant {now}")]
    StartInFuture { start: Timestamp, now: Timestamp },

    // Runtime errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Display surface error: {0}")]
    Surface(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type for warclock operations
pub type WarclockResult<T> = Result<T, WarclockError>;
