//! Input validation helpers

use shared::{AppError, AppResult};

pub const MAX_NAME_LEN: usize = 128;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_NOTE_LEN: usize = 2000;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate a required free-text field: non-empty after trimming,
/// at most `max_len` characters
pub fn validate_required_text(field: &str, value: &str, max_len: usize) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required_field(field));
    }
    if trimmed.chars().count() > max_len {
        return Err(
            AppError::validation(format!("{} exceeds {} characters", field, max_len))
                .with_detail("field", field),
        );
    }
    Ok(trimmed.to_string())
}

/// Validate an optional free-text field, normalizing empty to `None`
pub fn validate_optional_text(
    field: &str,
    value: Option<&str>,
    max_len: usize,
) -> AppResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => validate_required_text(field, v, max_len).map(Some),
    }
}

/// Minimal email shape check: one `@` with text on both sides and a dot
/// in the domain part
pub fn validate_email(value: &str) -> AppResult<String> {
    let email = validate_required_text("email", value, MAX_EMAIL_LEN)?;
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(AppError::validation("invalid email address").with_detail("field", "email"));
    }
    Ok(email.to_lowercase())
}

/// Password length bounds
pub fn validate_password(value: &str) -> AppResult<()> {
    let len = value.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if len > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at most {} characters",
            MAX_PASSWORD_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(
            validate_required_text("name", "  Kiss Anna  ", MAX_NAME_LEN).unwrap(),
            "Kiss Anna"
        );
        assert!(validate_required_text("name", "   ", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text_empty_is_none() {
        assert_eq!(
            validate_optional_text("note", Some("  "), MAX_NOTE_LEN).unwrap(),
            None
        );
        assert_eq!(
            validate_optional_text("note", Some("ok"), MAX_NOTE_LEN).unwrap(),
            Some("ok".to_string())
        );
        assert_eq!(validate_optional_text("note", None, MAX_NOTE_LEN).unwrap(), None);
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(
            validate_email("Anna@Hivatal.hu").unwrap(),
            "anna@hivatal.hu"
        );
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("a@nodot").is_err());
    }

    #[test]
    fn test_password_bounds() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long-enough-password").is_ok());
    }
}
