//! Evaluation criterion type vocabulary and validation.

use crate::error::CoreError;

/// Criterion is scored on the canonical 0–100 scale.
pub const CRITERIA_TYPE_RATING: &str = "rating";

/// Criterion expects a free numeric value.
pub const CRITERIA_TYPE_NUMBER: &str = "number";

/// Criterion expects a free-text answer only.
pub const CRITERIA_TYPE_TEXT: &str = "text";

/// All valid criterion type values.
pub const VALID_CRITERIA_TYPES: &[&str] = &[
    CRITERIA_TYPE_RATING,
    CRITERIA_TYPE_NUMBER,
    CRITERIA_TYPE_TEXT,
];

/// Maximum length for a criterion title.
pub const MAX_CRITERIA_TITLE_LENGTH: usize = 200;

/// Validate that a criterion type string is one of the accepted values.
pub fn validate_criteria_type(criteria_type: &str) -> Result<(), CoreError> {
    if VALID_CRITERIA_TYPES.contains(&criteria_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid criteria type '{criteria_type}'. Must be one of: {}",
            VALID_CRITERIA_TYPES.join(", ")
        )))
    }
}

/// Validate a criterion title.
pub fn validate_criteria_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Criterion title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_CRITERIA_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Criterion title exceeds maximum length of {MAX_CRITERIA_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_criteria_types_accepted() {
        assert!(validate_criteria_type(CRITERIA_TYPE_RATING).is_ok());
        assert!(validate_criteria_type(CRITERIA_TYPE_NUMBER).is_ok());
        assert!(validate_criteria_type(CRITERIA_TYPE_TEXT).is_ok());
    }

    #[test]
    fn test_invalid_criteria_type_rejected() {
        let result = validate_criteria_type("scale");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid criteria type"));
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(validate_criteria_title("").is_err());
        assert!(validate_criteria_title("  ").is_err());
    }

    #[test]
    fn test_overlong_title_rejected() {
        let title = "x".repeat(MAX_CRITERIA_TITLE_LENGTH + 1);
        assert!(validate_criteria_title(&title).is_err());
    }

    #[test]
    fn test_normal_title_accepted() {
        assert!(validate_criteria_title("Teamwork").is_ok());
    }
}
