//! Port contracts for task storage and status policy.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;
pub mod transition;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use transition::{PermitAnyTransition, StatusTransitionPolicy};

#[cfg(test)]
pub use transition::MockStatusTransitionPolicy;
