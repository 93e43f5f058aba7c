//! Domain model for task records.
//!
//! The domain validates the shape of a task and nothing more: identity
//! allocation, uniqueness, and status transition rules belong to the
//! collaborators described in [`crate::task::ports`].

mod error;
mod ids;
mod record;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskValidationError};
pub use ids::{TaskId, TaskTitle};
pub use record::TaskRecord;
pub use status::TaskStatus;
pub use task::Task;
