//! Error types for bookcal-core.

use thiserror::Error;

/// Errors that can occur in bookcal-core operations.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid month: {0} (must be 1..=12)")]
    InvalidMonth(u32),

    #[error("Year {0} is outside the supported range")]
    InvalidYear(i32),

    #[error("Invalid date '{input}'. Expected {expected}")]
    InvalidDate { input: String, expected: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bookcal-core operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
