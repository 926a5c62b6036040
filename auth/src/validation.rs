//! Credential format rules.
//!
//! Pure functions over the submitted strings; no lookups, no side effects.
//! Checks run in a fixed order and the first failing rule wins, so callers
//! can surface the error's `Display` text directly to the client.

use thiserror::Error;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 100;

/// A credential format rule violation. The `Display` text is the
/// client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username cannot be empty")]
    UsernameEmpty,

    #[error("Username must be 3-50 characters")]
    UsernameLength,

    #[error("Username contains invalid characters")]
    UsernameInvalidCharacters,

    #[error("Password cannot be empty")]
    PasswordEmpty,

    #[error("Password must be 6-100 characters")]
    PasswordLength,

    #[error("Password must contain both letters and numbers")]
    PasswordComposition,
}

/// Validate a submitted username.
///
/// Rules, in order: must not be blank, must be 3-50 characters, and may only
/// contain `[A-Za-z0-9._-]`. Spaces count as invalid characters, not blanks.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::UsernameEmpty);
    }

    let length = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        return Err(ValidationError::UsernameLength);
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(ValidationError::UsernameInvalidCharacters);
    }

    Ok(())
}

/// Validate a submitted password.
///
/// Rules, in order: must not be blank, must be 6-100 characters, and must
/// contain at least one letter and one digit.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::PasswordEmpty);
    }

    let length = password.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&length) {
        return Err(ValidationError::PasswordLength);
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(ValidationError::PasswordComposition);
    }

    Ok(())
}
