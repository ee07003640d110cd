//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check: one `@`, non-empty local part, dotted domain).
pub fn validate_email(email: &str) -> Result<(), String> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None)
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err("Invalid email format".to_string()),
    }
}

/// Validate minimum length.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

/// Validate that a number is finite and strictly positive.
pub fn validate_positive(value: f64, field_name: &str) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be greater than 0", field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("test@").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn test_not_empty_and_min_length() {
        assert!(validate_not_empty("Food", "Category").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Category").unwrap_err(),
            "Category cannot be empty"
        );
        assert!(validate_min_length("ab", 3, "Name").is_err());
        assert!(validate_min_length("abc", 3, "Name").is_ok());
    }

    #[test]
    fn test_positive() {
        assert!(validate_positive(75.0, "Amount").is_ok());
        assert!(validate_positive(0.0, "Amount").is_err());
        assert!(validate_positive(-1.0, "Amount").is_err());
        assert!(validate_positive(f64::NAN, "Amount").is_err());
    }
}
