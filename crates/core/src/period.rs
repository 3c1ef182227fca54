//! Evaluation period status vocabulary, lifecycle rules, and field validation.
//!
//! A period is the time-boxed container for one evaluation cycle. Its status
//! only ever moves forward: draft → active → closed.

use chrono::NaiveDate;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Period is being prepared; fields and criteria are mutable.
pub const PERIOD_STATUS_DRAFT: &str = "draft";

/// Period is open; evaluations exist and accept submissions.
pub const PERIOD_STATUS_ACTIVE: &str = "active";

/// Period is finished; no further submissions or reviews.
pub const PERIOD_STATUS_CLOSED: &str = "closed";

/// All valid period status values.
pub const VALID_PERIOD_STATUSES: &[&str] = &[
    PERIOD_STATUS_DRAFT,
    PERIOD_STATUS_ACTIVE,
    PERIOD_STATUS_CLOSED,
];

/// All valid period type values.
pub const VALID_PERIOD_TYPES: &[&str] = &["monthly", "quarterly", "yearly"];

/// Maximum length for a period name.
pub const MAX_PERIOD_NAME_LENGTH: usize = 200;

/// Maximum length for a period code.
pub const MAX_PERIOD_CODE_LENGTH: usize = 50;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate that a period type string is one of the accepted values.
pub fn validate_period_type(period_type: &str) -> Result<(), CoreError> {
    if VALID_PERIOD_TYPES.contains(&period_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid period type '{period_type}'. Must be one of: {}",
            VALID_PERIOD_TYPES.join(", ")
        )))
    }
}

/// Validate period name and code presence and length.
pub fn validate_period_identity(name: &str, period_code: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Period name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_PERIOD_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Period name exceeds maximum length of {MAX_PERIOD_NAME_LENGTH} characters"
        )));
    }
    if period_code.trim().is_empty() {
        return Err(CoreError::Validation(
            "Period code must not be empty".to_string(),
        ));
    }
    if period_code.len() > MAX_PERIOD_CODE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Period code exceeds maximum length of {MAX_PERIOD_CODE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the date window and deadline ordering of a period.
///
/// Rules: `end_date` strictly after `start_date`; when present, deadlines
/// must satisfy `start_date <= self_assessment_deadline <=
/// hr_evaluation_deadline`.
pub fn validate_period_dates(
    start_date: NaiveDate,
    end_date: NaiveDate,
    self_assessment_deadline: Option<NaiveDate>,
    hr_evaluation_deadline: Option<NaiveDate>,
) -> Result<(), CoreError> {
    if end_date <= start_date {
        return Err(CoreError::Validation(
            "end_date must be strictly after start_date".to_string(),
        ));
    }

    if let Some(self_deadline) = self_assessment_deadline {
        if self_deadline < start_date {
            return Err(CoreError::Validation(
                "self_assessment_deadline must not be before start_date".to_string(),
            ));
        }
        if let Some(hr_deadline) = hr_evaluation_deadline {
            if hr_deadline < self_deadline {
                return Err(CoreError::Validation(
                    "hr_evaluation_deadline must not be before self_assessment_deadline"
                        .to_string(),
                ));
            }
        }
    } else if hr_evaluation_deadline.is_some() {
        return Err(CoreError::Validation(
            "hr_evaluation_deadline requires self_assessment_deadline".to_string(),
        ));
    }

    Ok(())
}

/// Check whether a period status transition is allowed.
///
/// The lifecycle is strictly forward: draft → active → closed.
pub fn can_transition_period(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        (PERIOD_STATUS_DRAFT, PERIOD_STATUS_ACTIVE)
            | (PERIOD_STATUS_ACTIVE, PERIOD_STATUS_CLOSED)
    )
}

/// Validate a period status transition, returning a StateError when the
/// move is not allowed.
pub fn validate_period_transition(from: &str, to: &str) -> Result<(), CoreError> {
    if can_transition_period(from, to) {
        Ok(())
    } else {
        Err(CoreError::State(format!(
            "Cannot transition period from '{from}' to '{to}'"
        )))
    }
}

/// Guard for operations that require a draft period (field updates,
/// criteria changes, deletion).
pub fn ensure_period_draft(status: &str) -> Result<(), CoreError> {
    if status == PERIOD_STATUS_DRAFT {
        Ok(())
    } else {
        Err(CoreError::State(format!(
            "Operation requires a draft period (current status: '{status}')"
        )))
    }
}

/// Guard for operations that require an active period (evaluation sync).
pub fn ensure_period_active(status: &str) -> Result<(), CoreError> {
    if status == PERIOD_STATUS_ACTIVE {
        Ok(())
    } else {
        Err(CoreError::State(format!(
            "Operation requires an active period (current status: '{status}')"
        )))
    }
}

/// Guard rejecting workflow writes once a period is closed.
pub fn ensure_period_not_closed(status: &str) -> Result<(), CoreError> {
    if status == PERIOD_STATUS_CLOSED {
        Err(CoreError::State(
            "Period is closed; evaluations can no longer be modified".to_string(),
        ))
    } else {
        Ok(())
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
