//! Error types for classpredict
//!
//! Validation failures are recoverable and shown inline in the form.
//! Everything else (config, terminal, serialization) bubbles up to `main`.

use thiserror::Error;

/// Input validation failures, worded the way the form shows them
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A field was empty, non-numeric, or negative
    #[error("Please fill out all fields with valid numbers.")]
    InvalidNumber,

    #[error("Completed students cannot exceed total students.")]
    FulfilledExceedsTotal,

    #[error("Days left cannot exceed total assignment duration.")]
    DaysLeftExceedsTotal,

    #[error("Total students must be at least 1.")]
    NoStudents,

    #[error("Total assignment duration must be at least 1 day.")]
    NoDays,

    /// Keeps the per-day curve to a bounded number of points
    #[error("Total assignment duration cannot exceed 3650 days.")]
    DurationTooLong,
}

/// Main error type for the predictor
#[derive(Error, Debug)]
pub enum PredictorError {
    /// Rejected form input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown completion model name
    #[error("Unknown completion model: {0}")]
    UnknownModel(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Terminal input errors
    #[error("Input error: {0}")]
    ReadlineError(#[from] rustyline::error::ReadlineError),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for predictor operations
pub type Result<T> = std::result::Result<T, PredictorError>;
