//! Task record and its value-producing updates.

use super::{TaskId, TaskRecord, TaskStatus, TaskTitle, TaskValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of trackable work.
///
/// Serializes as `{id, title, description?, status}`; an absent description is
/// omitted rather than written as an empty string. Decoding accepts only a
/// JSON object and goes through [`TaskRecord`], so every invalid shape is
/// reported as a [`TaskValidationError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: TaskStatus,
}

impl Task {
    /// Creates a task without a description.
    #[must_use]
    pub const fn new(id: TaskId, title: TaskTitle, status: TaskStatus) -> Self {
        Self {
            id,
            title,
            description: None,
            status,
        }
    }

    /// Creates a task from raw values.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskValidationError`] when the identifier, title or status
    /// tag is invalid.
    pub fn from_parts(
        id: u64,
        title: &str,
        description: Option<&str>,
        status: &str,
    ) -> Result<Self, TaskValidationError> {
        Ok(Self {
            id: TaskId::new(id)?,
            title: TaskTitle::new(title)?,
            description: description.map(str::to_owned),
            status: TaskStatus::try_from(status)?,
        })
    }

    /// Decodes a task from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::MalformedPayload`] when the text is not a
    /// JSON object, or the field-level variant describing the first invalid
    /// field.
    pub fn from_json(input: &str) -> Result<Self, TaskValidationError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|err| TaskValidationError::MalformedPayload(err.to_string()))?;
        Self::from_value(value)
    }

    /// Decodes a task from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Task::from_json`].
    pub fn from_value(value: Value) -> Result<Self, TaskValidationError> {
        if !value.is_object() {
            return Err(TaskValidationError::MalformedPayload(format!(
                "expected a JSON object, found {value}"
            )));
        }
        let record: TaskRecord = serde_json::from_value(value)
            .map_err(|err| TaskValidationError::MalformedPayload(err.to_string()))?;
        Self::try_from(record)
    }

    /// Encodes the task as JSON text.
    ///
    /// # Errors
    ///
    /// Propagates the encoder error; the task's fields are all plain
    /// strings and integers so this does not fail in practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if one is present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns this task with a different status.
    #[must_use]
    pub fn with_status(self, status: TaskStatus) -> Self {
        Self { status, ..self }
    }

    /// Returns this task with a different title.
    #[must_use]
    pub fn with_title(self, title: TaskTitle) -> Self {
        Self { title, ..self }
    }

    /// Returns this task with the given description, which may be empty.
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    /// Returns this task with its description removed.
    #[must_use]
    pub fn without_description(self) -> Self {
        Self {
            description: None,
            ..self
        }
    }
}

impl TryFrom<Value> for Task {
    type Error = TaskValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
