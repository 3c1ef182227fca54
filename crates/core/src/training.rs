//! Training session lifecycle and enrollment rules.

use crate::error::CoreError;
use crate::types::Timestamp;

/* --------------------------------------------------------------------------
Training statuses
-------------------------------------------------------------------------- */

/// Training is being planned.
pub const TRAINING_STATUS_DRAFT: &str = "draft";

/// Training accepts enrollments.
pub const TRAINING_STATUS_OPEN: &str = "open";

/// Training took place. Terminal.
pub const TRAINING_STATUS_COMPLETED: &str = "completed";

/// Training was called off. Terminal.
pub const TRAINING_STATUS_CANCELLED: &str = "cancelled";

/// All valid training status values.
pub const VALID_TRAINING_STATUSES: &[&str] = &[
    TRAINING_STATUS_DRAFT,
    TRAINING_STATUS_OPEN,
    TRAINING_STATUS_COMPLETED,
    TRAINING_STATUS_CANCELLED,
];

/* --------------------------------------------------------------------------
Enrollment statuses
-------------------------------------------------------------------------- */

/// Employee holds a seat.
pub const ENROLLMENT_STATUS_ENROLLED: &str = "enrolled";

/// Employee attended; set when the training completes.
pub const ENROLLMENT_STATUS_COMPLETED: &str = "completed";

/// Employee gave up the seat before completion.
pub const ENROLLMENT_STATUS_DROPPED: &str = "dropped";

/* --------------------------------------------------------------------------
Rules
-------------------------------------------------------------------------- */

/// Check whether a training status transition is allowed.
pub fn can_transition_training(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        (TRAINING_STATUS_DRAFT, TRAINING_STATUS_OPEN)
            | (TRAINING_STATUS_OPEN, TRAINING_STATUS_COMPLETED)
            | (TRAINING_STATUS_DRAFT, TRAINING_STATUS_CANCELLED)
            | (TRAINING_STATUS_OPEN, TRAINING_STATUS_CANCELLED)
    )
}

/// Validate a training status transition.
pub fn validate_training_transition(from: &str, to: &str) -> Result<(), CoreError> {
    if can_transition_training(from, to) {
        Ok(())
    } else {
        Err(CoreError::State(format!(
            "Cannot transition training from '{from}' to '{to}'"
        )))
    }
}

/// Validate the schedule window of a training.
pub fn validate_training_schedule(starts_at: Timestamp, ends_at: Timestamp) -> Result<(), CoreError> {
    if ends_at <= starts_at {
        return Err(CoreError::Validation(
            "ends_at must be strictly after starts_at".to_string(),
        ));
    }
    Ok(())
}

/// Validate a training capacity.
pub fn validate_training_capacity(capacity: i32) -> Result<(), CoreError> {
    if capacity < 1 {
        return Err(CoreError::Validation(
            "Capacity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Guard for enrollment: the training must be open and have a free seat.
pub fn ensure_can_enroll(status: &str, enrolled_count: i64, capacity: i32) -> Result<(), CoreError> {
    if status != TRAINING_STATUS_OPEN {
        return Err(CoreError::State(format!(
            "Enrollment requires an open training (current status: '{status}')"
        )));
    }
    if enrolled_count >= i64::from(capacity) {
        return Err(CoreError::Conflict("Training is full".to_string()));
    }
    Ok(())
}
