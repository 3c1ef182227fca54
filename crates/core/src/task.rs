//! Task assignment status vocabulary and transition rules.
//!
//! todo → in_progress → done, with cancellation possible from any
//! non-terminal status. done and cancelled are terminal.

use crate::error::CoreError;

/// Task created, not started.
pub const TASK_STATUS_TODO: &str = "todo";

/// Assignee is working on the task.
pub const TASK_STATUS_IN_PROGRESS: &str = "in_progress";

/// Task finished. Terminal.
pub const TASK_STATUS_DONE: &str = "done";

/// Task withdrawn by HR/Admin. Terminal.
pub const TASK_STATUS_CANCELLED: &str = "cancelled";

/// All valid task status values.
pub const VALID_TASK_STATUSES: &[&str] = &[
    TASK_STATUS_TODO,
    TASK_STATUS_IN_PROGRESS,
    TASK_STATUS_DONE,
    TASK_STATUS_CANCELLED,
];

/// Maximum length for a task title.
pub const MAX_TASK_TITLE_LENGTH: usize = 200;

/// Validate that a task status string is one of the accepted values.
pub fn validate_task_status(status: &str) -> Result<(), CoreError> {
    if VALID_TASK_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid task status '{status}'. Must be one of: {}",
            VALID_TASK_STATUSES.join(", ")
        )))
    }
}

/// Check whether a task status transition is allowed.
pub fn can_transition_task(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        (TASK_STATUS_TODO, TASK_STATUS_IN_PROGRESS)
            | (TASK_STATUS_TODO, TASK_STATUS_DONE)
            | (TASK_STATUS_IN_PROGRESS, TASK_STATUS_DONE)
            | (TASK_STATUS_TODO, TASK_STATUS_CANCELLED)
            | (TASK_STATUS_IN_PROGRESS, TASK_STATUS_CANCELLED)
    )
}

/// Validate a task status transition, returning a StateError when the move
/// is not allowed.
pub fn validate_task_transition(from: &str, to: &str) -> Result<(), CoreError> {
    if can_transition_task(from, to) {
        Ok(())
    } else {
        Err(CoreError::State(format!(
            "Cannot transition task from '{from}' to '{to}'"
        )))
    }
}

/// Validate a task title.
pub fn validate_task_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Task title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TASK_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Task title exceeds maximum length of {MAX_TASK_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}
