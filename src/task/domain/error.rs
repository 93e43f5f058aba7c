//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or decoding task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// A required field was absent or `null`.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// The identifier is not a positive integer within the supported range.
    #[error("invalid task identifier {0}, expected an integer between 1 and 2^53 - 1")]
    InvalidId(String),

    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The status is not one of the enumerated tags.
    #[error("invalid task status {0}, expected PENDING, IN_PROGRESS or COMPLETED")]
    InvalidStatus(String),

    /// A field carried a value of the wrong JSON type.
    #[error("field '{field}' must be a {expected}")]
    UnexpectedType {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the accepted type.
        expected: &'static str,
    },

    /// The title exceeds the configured character limit.
    #[error("task title has {actual} characters, limit is {max}")]
    TitleTooLong {
        /// Configured limit.
        max: usize,
        /// Observed length.
        actual: usize,
    },

    /// The description exceeds the configured character limit.
    #[error("task description has {actual} characters, limit is {max}")]
    DescriptionTooLong {
        /// Configured limit.
        max: usize,
        /// Observed length.
        actual: usize,
    },

    /// The payload is not a JSON object.
    #[error("malformed task payload: {0}")]
    MalformedPayload(String),
}

/// Error returned while parsing a task status tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

impl From<ParseTaskStatusError> for TaskValidationError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::InvalidStatus(err.0)
    }
}
