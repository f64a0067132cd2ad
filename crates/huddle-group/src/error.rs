//! Error types for grouping, naming, and export.

use std::time::Duration;

use thiserror::Error;

/// Result type for grouping operations.
pub type GroupResult<T> = Result<T, GroupError>;

/// Errors that can occur while exporting groups.
#[derive(Debug, Error)]
pub enum GroupError {
    /// The CSV writer rejected a record.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the in-memory buffer failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The written bytes were not valid UTF-8.
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Reasons a naming request produced no usable names.
///
/// These never escape decoration; they are logged and the groups keep
/// their current names.
#[derive(Debug, Error)]
pub enum NamingError {
    /// No naming service is configured.
    #[error("group naming is not configured")]
    Disabled,

    /// The request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("naming service returned status {0}")]
    Status(u16),

    /// The response did not contain a JSON array of strings.
    #[error("malformed naming response: {0}")]
    MalformedResponse(String),

    /// The service did not answer in time.
    #[error("naming request timed out after {0:?}")]
    TimedOut(Duration),
}
