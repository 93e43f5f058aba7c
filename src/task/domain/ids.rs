//! Identifier and validated scalar types for the task domain.

use super::TaskValidationError;
use serde::Serialize;
use std::fmt;

/// Identifier of a task, allocated by whichever store owns the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Largest identifier a JSON consumer can represent exactly (`2^53 - 1`).
    pub const MAX: u64 = (1 << 53) - 1;

    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidId`] when the value is zero or
    /// exceeds [`TaskId::MAX`].
    pub fn new(value: u64) -> Result<Self, TaskValidationError> {
        if value == 0 || value > Self::MAX {
            return Err(TaskValidationError::InvalidId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for TaskId {
    type Error = TaskValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable task label, guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title. The text is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyTitle`] if the text is empty or
    /// contains only whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the title length in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
