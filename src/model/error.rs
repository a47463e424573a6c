use thiserror::Error;

/// Errors raised while building model values from textual input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown day of week: {0}")]
    UnknownDay(String),

    #[error("Malformed clock time (expected HH:MM): {0}")]
    MalformedTime(String),

    #[error("Time slot must start before it ends: {start}-{end}")]
    EmptySlot { start: String, end: String },
}
