//! Application services for task orchestration.

mod lifecycle;
mod limits;

pub use lifecycle::{
    CreateTaskRequest, DescriptionUpdate, TaskService, TaskServiceError, TaskServiceResult,
    UpdateTaskRequest,
};
pub use limits::TaskLimits;
