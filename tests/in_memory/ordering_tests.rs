//! Listing tests for [`InMemoryTaskRepository`].

use crate::in_memory::helpers::{repo, runtime, task};
use rstest::rstest;
use std::io;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskStatus, ports::TaskRepository,
};
use tokio::runtime::Runtime;

fn ids(tasks: &[taskboard::task::domain::Task]) -> Vec<u64> {
    tasks.iter().map(|stored| stored.id().value()).collect()
}

#[rstest]
fn list_returns_tasks_in_id_order(runtime: io::Result<Runtime>, repo: InMemoryTaskRepository) {
    let rt = runtime.expect("runtime creation");
    for (id, title) in [(30, "third"), (10, "first"), (20, "second")] {
        let created = task(id, title, TaskStatus::Pending).expect("task");
        rt.block_on(repo.store(&created)).expect("store");
    }

    let listed = rt.block_on(repo.list()).expect("list");

    assert_eq!(ids(&listed), vec![10, 20, 30]);
}

#[rstest]
#[case(TaskStatus::Pending, vec![1, 4])]
#[case(TaskStatus::InProgress, vec![2])]
#[case(TaskStatus::Completed, vec![3])]
fn list_by_status_filters_tasks(
    runtime: io::Result<Runtime>,
    repo: InMemoryTaskRepository,
    #[case] status: TaskStatus,
    #[case] expected: Vec<u64>,
) {
    let rt = runtime.expect("runtime creation");
    for (id, stored_status) in [
        (1, TaskStatus::Pending),
        (2, TaskStatus::InProgress),
        (3, TaskStatus::Completed),
        (4, TaskStatus::Pending),
    ] {
        let created = task(id, "Chore", stored_status).expect("task");
        rt.block_on(repo.store(&created)).expect("store");
    }

    let listed = rt.block_on(repo.list_by_status(status)).expect("list by status");

    assert_eq!(ids(&listed), expected);
}

#[rstest]
fn list_on_empty_repository_is_empty(runtime: io::Result<Runtime>, repo: InMemoryTaskRepository) {
    let rt = runtime.expect("runtime creation");
    let listed = rt.block_on(repo.list()).expect("list");
    assert!(listed.is_empty());
}
