//! Client-side validation for the registration form.
//!
//! Shallow, advisory checks only — the server revalidates everything. They
//! exist so obviously bad input never costs a network round trip.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum length for both username and password.
pub const MIN_CREDENTIAL_LEN: usize = 6;

/// Why a registration form was rejected before submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("username must be at least 6 characters")]
    UsernameTooShort,
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// Validate the registration fields in form order.
///
/// # Errors
///
/// Returns the first failed [`RegistrationError`] check.
pub fn validate_registration(
    username: &str,
    password: &str,
    email: &str,
) -> Result<(), RegistrationError> {
    if username.chars().count() < MIN_CREDENTIAL_LEN {
        return Err(RegistrationError::UsernameTooShort);
    }
    if password.chars().count() < MIN_CREDENTIAL_LEN {
        return Err(RegistrationError::PasswordTooShort);
    }
    if !email_is_valid(email) {
        return Err(RegistrationError::InvalidEmail);
    }
    Ok(())
}

/// Shape check for an email address: one `@` with a non-empty local part,
/// no whitespace anywhere, and a dot strictly inside the domain.
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}
