use super::*;

// =============================================================
// Credential lengths
// =============================================================

#[test]
fn five_character_username_is_rejected() {
    assert_eq!(
        validate_registration("alice", "secret9", "a@b.com"),
        Err(RegistrationError::UsernameTooShort)
    );
}

#[test]
fn five_character_password_is_rejected() {
    assert_eq!(
        validate_registration("alice1", "12345", "a@b.com"),
        Err(RegistrationError::PasswordTooShort)
    );
}

#[test]
fn six_character_credentials_pass() {
    assert_eq!(validate_registration("alice1", "123456", "a@b.com"), Ok(()));
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn well_shaped_emails_pass() {
    assert!(email_is_valid("user@example.com"));
    assert!(email_is_valid("first.last@sub.example.co"));
    assert!(email_is_valid("x@y.zz"));
}

#[test]
fn malformed_emails_fail() {
    assert!(!email_is_valid(""));
    assert!(!email_is_valid("plainaddress"));
    assert!(!email_is_valid("@example.com"));
    assert!(!email_is_valid("user@com"));
    assert!(!email_is_valid("user@.com"));
    assert!(!email_is_valid("user@com."));
    assert!(!email_is_valid("user@@example.com"));
    assert!(!email_is_valid("user name@example.com"));
}

#[test]
fn malformed_email_is_rejected_with_its_own_message() {
    assert_eq!(
        validate_registration("alice1", "123456", "not-an-email"),
        Err(RegistrationError::InvalidEmail)
    );
}

#[test]
fn rejection_messages_are_distinct() {
    assert_ne!(
        RegistrationError::UsernameTooShort.to_string(),
        RegistrationError::PasswordTooShort.to_string()
    );
    assert_ne!(
        RegistrationError::PasswordTooShort.to_string(),
        RegistrationError::InvalidEmail.to_string()
    );
}
