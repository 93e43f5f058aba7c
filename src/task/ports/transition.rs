//! Policy port deciding which status changes are legal.

use crate::task::domain::TaskStatus;

/// Status transition rules supplied by the owner of a task collection.
#[cfg_attr(test, mockall::automock)]
pub trait StatusTransitionPolicy: Send + Sync {
    /// Returns whether a task may move from `from` to `to`.
    fn permits(&self, from: TaskStatus, to: TaskStatus) -> bool;
}

/// Policy that accepts every transition, including same-status writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermitAnyTransition;

impl StatusTransitionPolicy for PermitAnyTransition {
    fn permits(&self, _from: TaskStatus, _to: TaskStatus) -> bool {
        true
    }
}
