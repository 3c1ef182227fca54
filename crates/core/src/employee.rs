//! Employee record vocabulary and validation.

use crate::error::CoreError;

/// Employee is on the active roster.
pub const EMPLOYMENT_STATUS_ACTIVE: &str = "active";

/// Employee is on extended leave.
pub const EMPLOYMENT_STATUS_ON_LEAVE: &str = "on_leave";

/// Employee has left the company.
pub const EMPLOYMENT_STATUS_RESIGNED: &str = "resigned";

/// All valid employment status values.
pub const VALID_EMPLOYMENT_STATUSES: &[&str] = &[
    EMPLOYMENT_STATUS_ACTIVE,
    EMPLOYMENT_STATUS_ON_LEAVE,
    EMPLOYMENT_STATUS_RESIGNED,
];

/// Maximum length for an employee's full name.
pub const MAX_FULL_NAME_LENGTH: usize = 200;

/// Maximum length for a staff code.
pub const MAX_STAFF_CODE_LENGTH: usize = 30;

/// Validate that an employment status string is one of the accepted values.
pub fn validate_employment_status(status: &str) -> Result<(), CoreError> {
    if VALID_EMPLOYMENT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid employment status '{status}'. Must be one of: {}",
            VALID_EMPLOYMENT_STATUSES.join(", ")
        )))
    }
}

/// Validate a list of employment statuses used as a roster predicate.
///
/// An empty list is rejected: a fan-out over nobody is always a caller
/// mistake.
pub fn validate_roster_statuses(statuses: &[String]) -> Result<(), CoreError> {
    if statuses.is_empty() {
        return Err(CoreError::Validation(
            "Roster statuses must not be empty".to_string(),
        ));
    }
    let mut invalid: Vec<String> = Vec::new();
    for status in statuses {
        if !VALID_EMPLOYMENT_STATUSES.contains(&status.as_str()) {
            invalid.push(format!("invalid employment status '{status}'"));
        }
    }
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(CoreError::validation_from(invalid))
    }
}

/// Validate employee identity fields.
pub fn validate_employee_identity(staff_code: &str, full_name: &str) -> Result<(), CoreError> {
    if staff_code.trim().is_empty() {
        return Err(CoreError::Validation(
            "Staff code must not be empty".to_string(),
        ));
    }
    if staff_code.len() > MAX_STAFF_CODE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Staff code exceeds maximum length of {MAX_STAFF_CODE_LENGTH} characters"
        )));
    }
    if full_name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Full name must not be empty".to_string(),
        ));
    }
    if full_name.len() > MAX_FULL_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Full name exceeds maximum length of {MAX_FULL_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_statuses_accepted() {
        assert!(validate_employment_status(EMPLOYMENT_STATUS_ACTIVE).is_ok());
        assert!(validate_employment_status(EMPLOYMENT_STATUS_ON_LEAVE).is_ok());
        assert!(validate_employment_status(EMPLOYMENT_STATUS_RESIGNED).is_ok());
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!(validate_employment_status("fired").is_err());
        assert!(validate_employment_status("").is_err());
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(validate_roster_statuses(&[]).is_err());
    }

    #[test]
    fn test_roster_aggregates_all_invalid_entries() {
        let statuses = vec![
            "active".to_string(),
            "ghost".to_string(),
            "phantom".to_string(),
        ];
        let result = validate_roster_statuses(&statuses);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("ghost"));
        assert!(msg.contains("phantom"));
    }

    #[test]
    fn test_valid_roster_accepted() {
        let statuses = vec!["active".to_string(), "on_leave".to_string()];
        assert!(validate_roster_statuses(&statuses).is_ok());
    }

    #[test]
    fn test_identity_validation() {
        assert!(validate_employee_identity("EMP-001", "Dana Whitfield").is_ok());
        assert!(validate_employee_identity("", "Dana Whitfield").is_err());
        assert!(validate_employee_identity("EMP-001", "").is_err());
        assert!(validate_employee_identity("EMP-001", &"x".repeat(201)).is_err());
    }
}
