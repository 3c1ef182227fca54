//! Employee evaluation status vocabulary, transition rules, and score
//! validation.
//!
//! The per-employee lifecycle: pending → submitted → reviewed, with a
//! revision_requested side branch that returns to submitted on resubmission.
//! `reviewed` is terminal.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Evaluation created by fan-out; the employee has not submitted yet.
pub const EVALUATION_STATUS_PENDING: &str = "pending";

/// Self-assessment submitted; waiting for HR review.
pub const EVALUATION_STATUS_SUBMITTED: &str = "submitted";

/// HR approved; score computed. Terminal.
pub const EVALUATION_STATUS_REVIEWED: &str = "reviewed";

/// HR asked the employee to revise and resubmit.
pub const EVALUATION_STATUS_REVISION_REQUESTED: &str = "revision_requested";

/// All valid evaluation status values.
pub const VALID_EVALUATION_STATUSES: &[&str] = &[
    EVALUATION_STATUS_PENDING,
    EVALUATION_STATUS_SUBMITTED,
    EVALUATION_STATUS_REVIEWED,
    EVALUATION_STATUS_REVISION_REQUESTED,
];

/// Inclusive lower bound of the canonical score scale.
pub const MIN_SCORE: i32 = 0;

/// Inclusive upper bound of the canonical score scale.
pub const MAX_SCORE: i32 = 100;

/* --------------------------------------------------------------------------
Transition rules
-------------------------------------------------------------------------- */

/// Check whether an evaluation status transition is allowed.
pub fn can_transition_evaluation(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        (EVALUATION_STATUS_PENDING, EVALUATION_STATUS_SUBMITTED)
            | (EVALUATION_STATUS_SUBMITTED, EVALUATION_STATUS_REVIEWED)
            | (EVALUATION_STATUS_SUBMITTED, EVALUATION_STATUS_REVISION_REQUESTED)
            | (EVALUATION_STATUS_REVISION_REQUESTED, EVALUATION_STATUS_SUBMITTED)
    )
}

/// Guard for the employee submit action.
///
/// Submission is allowed from `pending` and `revision_requested`. A
/// `reviewed` evaluation is terminal; re-submitting one that is already
/// `submitted` is also rejected so HR never reviews a moving target.
pub fn ensure_can_submit(status: &str) -> Result<(), CoreError> {
    match status {
        EVALUATION_STATUS_PENDING | EVALUATION_STATUS_REVISION_REQUESTED => Ok(()),
        EVALUATION_STATUS_REVIEWED => Err(CoreError::State(
            "Evaluation has already been reviewed".to_string(),
        )),
        other => Err(CoreError::State(format!(
            "Cannot submit an evaluation in status '{other}'"
        ))),
    }
}

/// Guard for the HR approve action. Only `submitted` evaluations can be
/// approved; approving earlier would record a review with no score.
pub fn ensure_can_review(status: &str) -> Result<(), CoreError> {
    match status {
        EVALUATION_STATUS_SUBMITTED => Ok(()),
        EVALUATION_STATUS_REVIEWED => Err(CoreError::State(
            "Evaluation has already been reviewed".to_string(),
        )),
        other => Err(CoreError::State(format!(
            "Evaluation must be submitted before review (current status: '{other}')"
        ))),
    }
}

/// Validate an optional self/hr score against the canonical 0–100 scale.
pub fn validate_score(score: Option<i32>) -> Result<(), CoreError> {
    match score {
        Some(s) if !(MIN_SCORE..=MAX_SCORE).contains(&s) => Err(CoreError::Validation(
            format!("Score must be between {MIN_SCORE} and {MAX_SCORE}, got {s}"),
        )),
        _ => Ok(()),
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_to_submitted_allowed() {
        assert!(can_transition_evaluation(
            EVALUATION_STATUS_PENDING,
            EVALUATION_STATUS_SUBMITTED
        ));
    }

    #[test]
    fn test_submitted_to_reviewed_allowed() {
        assert!(can_transition_evaluation(
            EVALUATION_STATUS_SUBMITTED,
            EVALUATION_STATUS_REVIEWED
        ));
    }

    #[test]
    fn test_submitted_to_revision_requested_allowed() {
        assert!(can_transition_evaluation(
            EVALUATION_STATUS_SUBMITTED,
            EVALUATION_STATUS_REVISION_REQUESTED
        ));
    }

    #[test]
    fn test_resubmission_after_revision_allowed() {
        assert!(can_transition_evaluation(
            EVALUATION_STATUS_REVISION_REQUESTED,
            EVALUATION_STATUS_SUBMITTED
        ));
    }

    #[test]
    fn test_reviewed_is_terminal() {
        assert!(!can_transition_evaluation(
            EVALUATION_STATUS_REVIEWED,
            EVALUATION_STATUS_SUBMITTED
        ));
        assert!(!can_transition_evaluation(
            EVALUATION_STATUS_REVIEWED,
            EVALUATION_STATUS_PENDING
        ));
        assert!(!can_transition_evaluation(
            EVALUATION_STATUS_REVIEWED,
            EVALUATION_STATUS_REVISION_REQUESTED
        ));
    }

    #[test]
    fn test_pending_cannot_jump_to_reviewed() {
        assert!(!can_transition_evaluation(
            EVALUATION_STATUS_PENDING,
            EVALUATION_STATUS_REVIEWED
        ));
    }

    #[test]
    fn test_submit_allowed_from_pending_and_revision() {
        assert!(ensure_can_submit(EVALUATION_STATUS_PENDING).is_ok());
        assert!(ensure_can_submit(EVALUATION_STATUS_REVISION_REQUESTED).is_ok());
    }

    #[test]
    fn test_submit_rejected_when_reviewed() {
        let result = ensure_can_submit(EVALUATION_STATUS_REVIEWED);
        assert!(matches!(result, Err(CoreError::State(_))));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("already been reviewed"));
    }

    #[test]
    fn test_submit_rejected_when_already_submitted() {
        assert!(ensure_can_submit(EVALUATION_STATUS_SUBMITTED).is_err());
    }

    #[test]
    fn test_review_requires_submitted() {
        assert!(ensure_can_review(EVALUATION_STATUS_SUBMITTED).is_ok());
        assert!(ensure_can_review(EVALUATION_STATUS_PENDING).is_err());
        assert!(ensure_can_review(EVALUATION_STATUS_REVISION_REQUESTED).is_err());
        assert!(ensure_can_review(EVALUATION_STATUS_REVIEWED).is_err());
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(Some(0)).is_ok());
        assert!(validate_score(Some(100)).is_ok());
        assert!(validate_score(Some(55)).is_ok());
        assert!(validate_score(None).is_ok());
        assert!(validate_score(Some(-1)).is_err());
        assert!(validate_score(Some(101)).is_err());
    }
}
