//! Shared test helpers for in-memory repository integration tests.

use rstest::fixture;
use std::io;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId, TaskStatus, TaskTitle, TaskValidationError},
};
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Builds a task with the given identifier, title and status.
///
/// # Errors
///
/// Returns an error if the identifier or title is invalid.
pub fn task(id: u64, title: &str, status: TaskStatus) -> Result<Task, TaskValidationError> {
    Ok(Task::new(TaskId::new(id)?, TaskTitle::new(title)?, status))
}
