//! In-memory integration tests for task service operations.

use std::sync::Arc;

use rstest::{fixture, rstest};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskStatus},
    ports::StatusTransitionPolicy,
    services::{CreateTaskRequest, TaskService, TaskServiceError, UpdateTaskRequest},
};

/// Policy used by these tests: completed tasks stay completed.
struct CompletedIsFinal;

impl StatusTransitionPolicy for CompletedIsFinal {
    fn permits(&self, from: TaskStatus, _to: TaskStatus) -> bool {
        from != TaskStatus::Completed
    }
}

type TestService = TaskService<InMemoryTaskRepository, CompletedIsFinal>;

#[fixture]
fn service() -> TestService {
    TaskService::with_policy(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(CompletedIsFinal),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_moves_through_every_status(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Renew passport"))
        .await
        .expect("task creation should succeed");

    let started = service
        .change_status(created.id(), TaskStatus::InProgress)
        .await
        .expect("start should succeed");
    let finished = service
        .change_status(created.id(), TaskStatus::Completed)
        .await
        .expect("completion should succeed");

    assert_eq!(started.status(), TaskStatus::InProgress);
    assert_eq!(finished.status(), TaskStatus::Completed);
    assert_eq!(finished.title(), created.title());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn caller_policy_blocks_reopening(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("File taxes").with_status(TaskStatus::Completed))
        .await
        .expect("task creation should succeed");

    let result = service
        .change_status(created.id(), TaskStatus::Pending)
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::TransitionRejected { id, .. }) if id == created.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn imported_task_round_trips_through_store(service: TestService) {
    let payload = r#"{"id": 2, "title": "Ship release", "description": "v2.0", "status": "IN_PROGRESS"}"#;

    let imported = service.import(payload).await.expect("import should succeed");
    let fetched = service
        .find(imported.id())
        .await
        .expect("lookup should succeed")
        .expect("imported task should be stored");
    let encoded = fetched.to_json().expect("encode task");

    assert_eq!(Task::from_json(&encoded), Ok(imported));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn detail_updates_do_not_touch_status(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Paint fence").with_status(TaskStatus::InProgress))
        .await
        .expect("task creation should succeed");

    let updated = service
        .update_details(
            UpdateTaskRequest::new(created.id())
                .with_title("Paint garden fence")
                .with_description("white, two coats"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.title().as_str(), "Paint garden fence");
    assert_eq!(updated.description(), Some("white, two coats"));
}
