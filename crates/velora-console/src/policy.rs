//! Form validation policy
//!
//! Client-side checks for the admin-creation form, kept as pure functions
//! so they are testable without any UI. The checks run in a fixed order and
//! stop at the first violation; each violation carries the exact message
//! shown to the operator. The auth service enforces its own rules
//! regardless, so passing here is a convenience, not a security boundary.

use regex::Regex;
use thiserror::Error;

/// Characters accepted by the special-character password rule.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A violated form rule, in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("Full name is required!")]
    NameRequired,
    #[error("Email is required!")]
    EmailRequired,
    #[error("Password is required!")]
    PasswordRequired,
    #[error("Please confirm your password!")]
    ConfirmationRequired,
    #[error("Please enter a valid email address!")]
    EmailInvalid,
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long!")]
    PasswordTooShort,
    #[error("Password must contain at least one uppercase letter!")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter!")]
    MissingLowercase,
    #[error("Password must contain at least one number!")]
    MissingDigit,
    #[error("Password must contain at least one special character (!@#$%^&*...)!")]
    MissingSpecialCharacter,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Check whether a string is shaped like an email address.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Check a password against the complexity rules, first violation wins.
pub fn validate_password(password: &str) -> Result<(), PolicyViolation> {
    if password.chars().count() < 8 {
        return Err(PolicyViolation::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PolicyViolation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PolicyViolation::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PolicyViolation::MissingDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PolicyViolation::MissingSpecialCharacter);
    }
    Ok(())
}

/// Validate the whole admin-creation form.
///
/// Required fields come first, then email shape, then password agreement,
/// then password complexity.
pub fn validate_new_admin(
    full_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), PolicyViolation> {
    if full_name.trim().is_empty() {
        return Err(PolicyViolation::NameRequired);
    }
    if email.trim().is_empty() {
        return Err(PolicyViolation::EmailRequired);
    }
    if password.is_empty() {
        return Err(PolicyViolation::PasswordRequired);
    }
    if confirm_password.is_empty() {
        return Err(PolicyViolation::ConfirmationRequired);
    }
    if !is_valid_email(email) {
        return Err(PolicyViolation::EmailInvalid);
    }
    if password != confirm_password {
        return Err(PolicyViolation::PasswordMismatch);
    }
    validate_password(password)
}
