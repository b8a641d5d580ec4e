//! Error types for addrbench.

use thiserror::Error;

/// Result type for addrbench operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for addrbench operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Country code has no display-name entry.
    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    /// Dataset file could not be resolved.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Results file loading/parsing error.
    #[error("Results error: {0}")]
    Results(String),

    /// Model test call failed.
    #[error("Evaluation failed: {0}")]
    Evaluation(String),

    /// Report generation error.
    #[error("Report error: {0}")]
    Report(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a dataset error.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Error::Dataset(msg.into())
    }

    /// Create a results error.
    pub fn results(msg: impl Into<String>) -> Self {
        Error::Results(msg.into())
    }

    /// Create an evaluation error.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Error::Evaluation(msg.into())
    }

    /// Create a report error.
    pub fn report(msg: impl Into<String>) -> Self {
        Error::Report(msg.into())
    }
}
