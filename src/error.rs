//! Error types for scheduling and state snapshots.
use thiserror::Error;

/// Errors raised by the SM-2 scheduler.
///
/// Validation happens before any field is touched, so a failed call leaves
/// the learning state exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("quality must be 0-5, got {0}")]
    InvalidQuality(i32),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while reading or writing a learning state snapshot.
#[derive(Error, Debug)]
pub enum StateFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
