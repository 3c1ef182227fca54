//! Announcement audience vocabulary and validation.

use crate::error::CoreError;

/// Visible to everyone.
pub const AUDIENCE_ALL: &str = "all";

/// Visible to staff accounts.
pub const AUDIENCE_STAFF: &str = "staff";

/// Visible to HR and Admin accounts.
pub const AUDIENCE_HR: &str = "hr";

/// All valid audience values.
pub const VALID_AUDIENCES: &[&str] = &[AUDIENCE_ALL, AUDIENCE_STAFF, AUDIENCE_HR];

/// Maximum length for an announcement title.
pub const MAX_ANNOUNCEMENT_TITLE_LENGTH: usize = 200;

/// Validate that an audience string is one of the accepted values.
pub fn validate_audience(audience: &str) -> Result<(), CoreError> {
    if VALID_AUDIENCES.contains(&audience) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid audience '{audience}'. Must be one of: {}",
            VALID_AUDIENCES.join(", ")
        )))
    }
}

/// Validate announcement content.
pub fn validate_announcement(title: &str, body: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Announcement title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_ANNOUNCEMENT_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Announcement title exceeds maximum length of {MAX_ANNOUNCEMENT_TITLE_LENGTH} characters"
        )));
    }
    if body.trim().is_empty() {
        return Err(CoreError::Validation(
            "Announcement body must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_audiences_accepted() {
        assert!(validate_audience(AUDIENCE_ALL).is_ok());
        assert!(validate_audience(AUDIENCE_STAFF).is_ok());
        assert!(validate_audience(AUDIENCE_HR).is_ok());
    }

    #[test]
    fn test_invalid_audience_rejected() {
        assert!(validate_audience("managers").is_err());
        assert!(validate_audience("").is_err());
    }

    #[test]
    fn test_content_validation() {
        assert!(validate_announcement("Office closure", "Closed Friday.").is_ok());
        assert!(validate_announcement("", "body").is_err());
        assert!(validate_announcement("title", "  ").is_err());
        assert!(validate_announcement(&"x".repeat(201), "body").is_err());
    }
}
