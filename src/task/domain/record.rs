//! Loosely-typed wire record used to decode tasks.
//!
//! Every field is captured as an optional JSON value so that shape problems
//! surface as [`TaskValidationError`] variants instead of decoder messages.

use super::{Task, TaskId, TaskStatus, TaskTitle, TaskValidationError};
use serde::Deserialize;
use serde_json::Value;

/// Undecoded task fields as they appear on the wire.
///
/// Unknown fields are ignored. A `null` value is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskRecord {
    /// Raw `id` value.
    #[serde(default)]
    pub id: Option<Value>,
    /// Raw `title` value.
    #[serde(default)]
    pub title: Option<Value>,
    /// Raw `description` value.
    #[serde(default)]
    pub description: Option<Value>,
    /// Raw `status` value.
    #[serde(default)]
    pub status: Option<Value>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let id = decode_id(record.id)?;
        let title = decode_title(record.title)?;
        let status = decode_status(record.status)?;
        let mut task = Self::new(id, title, status);
        if let Some(description) = decode_description(record.description)? {
            task = task.with_description(description);
        }
        Ok(task)
    }
}

fn decode_id(raw: Option<Value>) -> Result<TaskId, TaskValidationError> {
    let value = raw.ok_or(TaskValidationError::MissingField("id"))?;
    match value.as_u64().or_else(|| whole_float(&value)) {
        Some(number) => TaskId::new(number),
        None => Err(TaskValidationError::InvalidId(value.to_string())),
    }
}

/// [`TaskId::MAX`] as an exactly representable float.
const MAX_ID_AS_F64: f64 = 9_007_199_254_740_991.0;

/// Accepts JSON numbers such as `1.0` that carry no fractional part.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is checked to be a whole number within 0..=2^53-1"
)]
fn whole_float(value: &Value) -> Option<u64> {
    let float = value.as_f64()?;
    (float.fract() == 0.0 && (0.0..=MAX_ID_AS_F64).contains(&float)).then_some(float as u64)
}

fn decode_title(raw: Option<Value>) -> Result<TaskTitle, TaskValidationError> {
    match raw {
        None => Err(TaskValidationError::MissingField("title")),
        Some(Value::String(text)) => TaskTitle::new(text),
        Some(_) => Err(TaskValidationError::UnexpectedType {
            field: "title",
            expected: "string",
        }),
    }
}

fn decode_description(raw: Option<Value>) -> Result<Option<String>, TaskValidationError> {
    match raw {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(TaskValidationError::UnexpectedType {
            field: "description",
            expected: "string",
        }),
    }
}

fn decode_status(raw: Option<Value>) -> Result<TaskStatus, TaskValidationError> {
    match raw {
        None => Err(TaskValidationError::MissingField("status")),
        Some(Value::String(tag)) => Ok(TaskStatus::try_from(tag.as_str())?),
        Some(other) => Err(TaskValidationError::InvalidStatus(other.to_string())),
    }
}
