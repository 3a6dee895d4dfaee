use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("File not found or could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV schedule: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write JSON schedule: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single `start-end` token could not become a [`TimeInterval`].
///
/// [`TimeInterval`]: crate::schedule::TimeInterval
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("cannot read '{0}' as a time range (expected H-H or H:MM-H:MM)")]
    Malformed(String),

    #[error("start {start} is not before end {end}")]
    Reversed { start: String, end: String },

    #[error("minute {0} lies outside a single day")]
    OutOfDay(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
