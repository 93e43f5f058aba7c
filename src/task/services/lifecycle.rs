//! Service layer for creating, updating and retiring tasks.

use crate::task::{
    domain::{Task, TaskId, TaskStatus, TaskTitle, TaskValidationError},
    ports::{PermitAnyTransition, StatusTransitionPolicy, TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

use super::TaskLimits;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: TaskStatus,
}

impl CreateTaskRequest {
    /// Creates a request for a pending task with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::Pending,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// How a detail update treats the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DescriptionUpdate {
    /// Leave the description unchanged.
    #[default]
    Keep,
    /// Replace the description, which may be empty.
    Set(String),
    /// Remove the description.
    Clear,
}

/// Request payload for changing a task's title or description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    title: Option<String>,
    description: DescriptionUpdate,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing on the given task.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            title: None,
            description: DescriptionUpdate::Keep,
        }
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = DescriptionUpdate::Set(description.into());
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = DescriptionUpdate::Clear;
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Task validation failed.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The transition policy refused the status change.
    #[error("task {id} cannot move from {from} to {to}")]
    TransitionRejected {
        /// Task whose status was to change.
        id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service over a repository and a transition policy.
#[derive(Clone)]
pub struct TaskService<R, P = PermitAnyTransition>
where
    R: TaskRepository,
    P: StatusTransitionPolicy,
{
    repository: Arc<R>,
    policy: Arc<P>,
    limits: TaskLimits,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a service that permits every status transition.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_policy(repository, Arc::new(PermitAnyTransition))
    }
}

impl<R, P> TaskService<R, P>
where
    R: TaskRepository,
    P: StatusTransitionPolicy,
{
    /// Creates a service with a caller-supplied transition policy.
    #[must_use]
    pub fn with_policy(repository: Arc<R>, policy: Arc<P>) -> Self {
        Self {
            repository,
            policy,
            limits: TaskLimits::default(),
        }
    }

    /// Replaces the size limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: TaskLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the active size limits.
    #[must_use]
    pub const fn limits(&self) -> &TaskLimits {
        &self.limits
    }

    /// Creates a task with a repository-allocated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for a blank or oversized
    /// title or description, or [`TaskServiceError::Repository`] when the
    /// store cannot allocate or persist the task.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        self.limits.check_title(&title)?;
        self.limits
            .check_description(request.description.as_deref())?;

        let id = self.repository.next_id().await?;
        let mut task = Task::new(id, title, request.status);
        if let Some(description) = request.description {
            task = task.with_description(description);
        }
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), status = %task.status(), "created task");
        Ok(task)
    }

    /// Decodes a JSON task and stores it under its own identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the payload does not
    /// describe a valid task within limits, or
    /// [`TaskServiceError::Repository`] when the identifier is taken.
    pub async fn import(&self, payload: &str) -> TaskServiceResult<Task> {
        let task = Task::from_json(payload)?;
        self.limits.check_title(task.title())?;
        self.limits.check_description(task.description())?;
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), status = %task.status(), "imported task");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists tasks ordered by identifier, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, status: Option<TaskStatus>) -> TaskServiceResult<Vec<Task>> {
        if let Some(wanted) = status {
            return Ok(self.repository.list_by_status(wanted).await?);
        }
        Ok(self.repository.list().await?)
    }

    /// Moves a task to a new status when the policy allows it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for an unknown task,
    /// [`TaskServiceError::TransitionRejected`] when the policy refuses, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn change_status(&self, id: TaskId, to: TaskStatus) -> TaskServiceResult<Task> {
        let current = self.load(id).await?;
        let from = current.status();
        if !self.policy.permits(from, to) {
            tracing::warn!(task_id = %id, %from, %to, "status transition rejected");
            return Err(TaskServiceError::TransitionRejected { id, from, to });
        }

        let updated = current.with_status(to);
        self.repository
            .update(&updated)
            .await
            .map_err(not_found_or_repository)?;
        tracing::debug!(task_id = %id, %from, %to, "changed task status");
        Ok(updated)
    }

    /// Changes a task's title and/or description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for an unknown task,
    /// [`TaskServiceError::Validation`] for an invalid title or description,
    /// or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update_details(&self, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let mut task = self.load(request.id).await?;

        if let Some(raw_title) = request.title {
            let title = TaskTitle::new(raw_title)?;
            self.limits.check_title(&title)?;
            task = task.with_title(title);
        }

        task = match request.description {
            DescriptionUpdate::Keep => task,
            DescriptionUpdate::Set(text) => {
                self.limits.check_description(Some(&text))?;
                task.with_description(text)
            }
            DescriptionUpdate::Clear => task.without_description(),
        };

        self.repository
            .update(&task)
            .await
            .map_err(not_found_or_repository)?;
        tracing::debug!(task_id = %task.id(), "updated task details");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for an unknown task or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository
            .remove(id)
            .await
            .map_err(not_found_or_repository)?;
        tracing::info!(task_id = %id, "deleted task");
        Ok(())
    }

    async fn load(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }
}

fn not_found_or_repository(err: TaskRepositoryError) -> TaskServiceError {
    match err {
        TaskRepositoryError::NotFound(id) => TaskServiceError::NotFound(id),
        other => TaskServiceError::Repository(other),
    }
}
