//! Shared world state for task record BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskStatus},
    ports::StatusTransitionPolicy,
    services::{TaskService, TaskServiceError},
};

/// Transition policy used by the scenarios: completed tasks stay completed.
pub struct CompletedIsFinal;

impl StatusTransitionPolicy for CompletedIsFinal {
    fn permits(&self, from: TaskStatus, _to: TaskStatus) -> bool {
        from != TaskStatus::Completed
    }
}

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, CompletedIsFinal>;

/// Scenario world for task record behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub pending_payload: Option<String>,
    pub current_task: Option<Task>,
    pub last_import_result: Option<Result<Task, TaskServiceError>>,
    pub last_status_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::with_policy(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(CompletedIsFinal),
        );
        Self {
            service,
            pending_payload: None,
            current_task: None,
            last_import_result: None,
            last_status_result: None,
        }
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
