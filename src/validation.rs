//! Client-side form validation.
//!
//! Each form has a fixed rule order: required fields first, then format
//! checks, then length checks. The first violated rule wins, and nothing
//! here touches the network or the form state.

use crate::api::{Credentials, JournalDraft, RegistrationInput};
use crate::mood::Mood;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// The first rule a form violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please write a journal entry before saving.")]
    JournalContentRequired,
    #[error("Please select your mood before saving your journal entry.")]
    MoodRequired,
}

/// Loose email check: something, an `@`, something, a dot, something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate the login form.
///
/// Order: email present, email pattern, password present.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    if is_blank(email) {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if is_blank(password) {
        return Err(ValidationError::PasswordRequired);
    }

    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Validate the registration form.
///
/// Order: username present, email present, email pattern, password present,
/// password length.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegistrationInput, ValidationError> {
    if is_blank(username) {
        return Err(ValidationError::UsernameRequired);
    }
    if is_blank(email) {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if is_blank(password) {
        return Err(ValidationError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(RegistrationInput {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Validate a journal draft: content present (trimmed), then a mood selected.
pub fn validate_journal(
    content: &str,
    mood: Option<Mood>,
) -> Result<JournalDraft, ValidationError> {
    if is_blank(content) {
        return Err(ValidationError::JournalContentRequired);
    }
    let Some(mood) = mood else {
        return Err(ValidationError::MoodRequired);
    };

    Ok(JournalDraft {
        content: content.to_string(),
        mood,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  user@example.com  "));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("@."));
        assert!(!is_valid_email("a @b.c"));
    }

    #[test]
    fn test_login_rule_order() {
        assert_eq!(
            validate_login("", "").unwrap_err(),
            ValidationError::EmailRequired
        );
        assert_eq!(
            validate_login("   ", "secret").unwrap_err(),
            ValidationError::EmailRequired
        );
        assert_eq!(
            validate_login("not-an-email", "").unwrap_err(),
            ValidationError::EmailInvalid
        );
        assert_eq!(
            validate_login("me@example.com", "  ").unwrap_err(),
            ValidationError::PasswordRequired
        );
    }

    #[test]
    fn test_login_short_password_is_accepted() {
        let creds = validate_login("me@example.com", "x").unwrap();
        assert_eq!(creds.email, "me@example.com");
        assert_eq!(creds.password, "x");
    }

    #[test]
    fn test_registration_rule_order() {
        assert_eq!(
            validate_registration("", "bad", "").unwrap_err(),
            ValidationError::UsernameRequired
        );
        assert_eq!(
            validate_registration("sam", "", "").unwrap_err(),
            ValidationError::EmailRequired
        );
        assert_eq!(
            validate_registration("sam", "bad", "").unwrap_err(),
            ValidationError::EmailInvalid
        );
        assert_eq!(
            validate_registration("sam", "sam@example.com", "").unwrap_err(),
            ValidationError::PasswordRequired
        );
        assert_eq!(
            validate_registration("sam", "sam@example.com", "12345").unwrap_err(),
            ValidationError::PasswordTooShort
        );
        assert!(validate_registration("sam", "sam@example.com", "123456").is_ok());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Characters, not bytes.
        assert!(validate_registration("sam", "sam@example.com", "ééééé").is_err());
        assert!(validate_registration("sam", "sam@example.com", "éééééé").is_ok());
        assert!(validate_registration("sam", "sam@example.com", "😀😀😀").is_err());
    }

    #[test]
    fn test_journal_rule_order() {
        assert_eq!(
            validate_journal("  \t", None).unwrap_err(),
            ValidationError::JournalContentRequired
        );
        assert_eq!(
            validate_journal("today was fine", None).unwrap_err(),
            ValidationError::MoodRequired
        );
        let draft = validate_journal(" today was fine ", Some(Mood::Calm)).unwrap();
        assert_eq!(draft.content, " today was fine ");
        assert_eq!(draft.mood, Mood::Calm);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::EmailInvalid.to_string(), "Please enter a valid email");
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }
}
