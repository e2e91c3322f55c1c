//! Field validators and pagination clamps.
//!
//! Length caps mirror the column widths in the schema so bad input is
//! rejected with a 400 before the driver ever sees it.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Default number of rows per page for paginated listings.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Maximum number of rows per page for paginated listings.
pub const MAX_PAGE_LIMIT: i64 = 200;

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGEST_LIMIT: i64 = 10;

/// Maximum number of autocomplete suggestions.
pub const MAX_SUGGEST_LIMIT: i64 = 50;

/// Pragmatic email shape check: one `@`, non-empty local part, and a domain
/// with at least one dot. Full RFC validation is deliberately not attempted.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )))
    }
}

/// Validate that a required text field is non-empty and within `max` chars.
pub fn validate_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate an optional text field's length (empty/absent is fine).
pub fn validate_opt_length(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), CoreError> {
    match value {
        Some(v) if v.chars().count() > max => Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

/// Clamp a requested page size into `[1, max]`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("buyer@example.com").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("two@@signs.com").is_err());
        assert!(validate_email("spaces in@local.com").is_err());
    }

    #[test]
    fn length_check_counts_chars_not_bytes() {
        // Four characters, more than four bytes.
        assert!(validate_length("title", "日本語字", 4).is_ok());
        assert!(validate_length("title", "日本語字五", 4).is_err());
    }

    #[test]
    fn empty_required_field_rejected() {
        assert!(validate_length("title", "   ", 100).is_err());
    }

    #[test]
    fn optional_length_allows_absent() {
        assert!(validate_opt_length("description", None, 10).is_ok());
        assert!(validate_opt_length("description", Some("short"), 10).is_ok());
        assert!(validate_opt_length("description", Some("far too long"), 10).is_err());
    }

    #[test]
    fn limits_clamp_into_range() {
        assert_eq!(clamp_limit(None, 50, 200), 50);
        assert_eq!(clamp_limit(Some(0), 50, 200), 1);
        assert_eq!(clamp_limit(Some(9999), 50, 200), 200);
        assert_eq!(clamp_offset(Some(-3)), 0);
        assert_eq!(clamp_offset(None), 0);
    }
}
