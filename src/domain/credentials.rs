//! Credential validator for the sign-in form.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::validation::ValidateFields;

/// Sign-in form input.
///
/// Sign-in has no password complexity rule: any non-empty password is
/// structurally acceptable. Whether it matches an account is the backend's
/// concern, not the validator's.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInInput {
    /// Account email address
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Account password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Keep the session after the browser closes
    #[serde(default)]
    #[schema(example = false)]
    pub remember_me: bool,
}

impl ValidateFields for SignInInput {
    const FIELDS: &'static [(&'static str, &'static str)] =
        &[("email", "email"), ("password", "password")];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ValidateFields;

    fn input(email: &str, password: &str) -> SignInInput {
        SignInInput {
            email: email.to_string(),
            password: password.to_string(),
            remember_me: false,
        }
    }

    #[test]
    fn test_valid_credentials_accepted() {
        assert!(input("user@example.com", "hunter2").validate_fields().is_ok());
    }

    #[test]
    fn test_single_char_password_accepted() {
        // Sign-in has no strength rule
        assert!(input("user@example.com", "a").validate_fields().is_ok());
    }

    #[test]
    fn test_empty_password_rejected() {
        let errors = input("user@example.com", "").validate_fields().unwrap_err();
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let errors = input("not-an-email", "hunter2").validate_fields().unwrap_err();
        assert_eq!(
            errors.get("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_empty_email_reports_required_message() {
        let errors = input("", "hunter2").validate_fields().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_all_violations_collected() {
        let errors = input("", "").validate_fields().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_remember_me_defaults_to_false() {
        let parsed: SignInInput =
            serde_json::from_str(r#"{"email":"user@example.com","password":"x"}"#).unwrap();
        assert!(!parsed.remember_me);
    }
}
