//! Error types for the argot text normalization pipeline.

use thiserror::Error;

/// The main error type for argot operations.
#[derive(Error, Debug)]
pub enum ArgotError {
    /// A pipeline or lookup referenced an entity class the registry does not define.
    #[error("Unknown entity class: {0}")]
    UnknownEntity(String),

    /// The input could not be decoded as text.
    #[error("Normalization failure: {0}")]
    Normalization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external annotator failed.
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for argot operations.
pub type Result<T> = std::result::Result<T, ArgotError>;

impl From<serde_json::Error> for ArgotError {
    fn from(err: serde_json::Error) -> Self {
        ArgotError::Serialization(err.to_string())
    }
}

impl From<regex::Error> for ArgotError {
    fn from(err: regex::Error) -> Self {
        ArgotError::Config(err.to_string())
    }
}

impl From<std::str::Utf8Error> for ArgotError {
    fn from(err: std::str::Utf8Error) -> Self {
        ArgotError::Normalization(err.to_string())
    }
}
