//! Email address validation

use log::debug;
use validator::ValidateEmail;

use crate::validation::constants::MAX_EMAIL_LENGTH;
use crate::validation::error::InvalidInput;

/// Validates an email address against the HTML5 email grammar.
///
/// On top of the grammar, the local part may not start or end with a dot nor
/// hold two dots in a row, and the domain must be ASCII and either contain a
/// dot or be a bracketed address literal, so `user@localhost` is rejected.
pub fn validate_email(email: &str) -> Result<(), InvalidInput> {
    if email.is_empty() {
        debug!("Email rejected: empty input");
        return Err(InvalidInput);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        debug!("Email rejected: longer than {} bytes", MAX_EMAIL_LENGTH);
        return Err(InvalidInput);
    }

    if !email.validate_email() {
        debug!("Email rejected: invalid format");
        return Err(InvalidInput);
    }

    let (local, domain) = email.rsplit_once('@').unwrap_or_default();
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        debug!("Email rejected: misplaced dot in local part {:?}", local);
        return Err(InvalidInput);
    }

    if !domain.is_ascii() {
        debug!("Email rejected: domain {:?} is not ASCII", domain);
        return Err(InvalidInput);
    }

    let is_literal = domain.starts_with('[') && domain.ends_with(']');
    if !is_literal && !domain.contains('.') {
        debug!("Email rejected: domain {:?} has no dot", domain);
        return Err(InvalidInput);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.com",
            "USER@EXAMPLE.COM",
            "user@sub.example.co.uk",
            "user@[127.0.0.1]",
        ];

        for email in valid_emails {
            assert!(validate_email(email).is_ok(), "Should accept valid email: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let too_long = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        let invalid_emails = vec![
            "",
            " ",
            "not-an-email",
            "@example.com",
            "user@",
            "user@.",
            "user@.com",
            "user name@example.com",
            "   user@example.com   ",
            "user@localhost",
            "john..doe@example.com",
            ".john@example.com",
            "john.@example.com",
            "user@exämple.com",
            &too_long,
        ];

        for email in invalid_emails {
            assert!(validate_email(email).is_err(), "Should reject invalid email: {}", email);
        }
    }
}
