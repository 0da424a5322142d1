//! Registration validator for the sign-up form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::domain::password_rules::failed_checks;
use crate::domain::validation::ValidateFields;

/// Letters and whitespace only.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

/// Sign-up form input.
///
/// The password rule requires all five checks from
/// [`crate::domain::password_rules`]; the strength scorer reads the same
/// checks, so a password that validates always scores 100.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpInput {
    /// Display name, letters and spaces only
    #[validate(
        custom(function = "validate_name_length"),
        regex(
            path = *NAME_PATTERN,
            message = "Name can only contain letters and spaces"
        )
    )]
    #[schema(example = "John Doe")]
    pub name: String,

    /// Account email address
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Password meeting all five complexity checks
    #[validate(custom(function = "validate_password_complexity"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,

    /// Terms and conditions acceptance, must be true
    #[validate(custom(function = "validate_terms_accepted"))]
    #[schema(example = true)]
    pub terms_accepted: bool,
}

impl ValidateFields for SignUpInput {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", "name"),
        ("email", "email"),
        ("password", "password"),
        ("terms_accepted", "termsAccepted"),
    ];
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Name length bounds, reported with dedicated messages for each bound.
fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length < MIN_NAME_LENGTH {
        return Err(violation(
            "name_too_short",
            "Name must be at least 2 characters",
        ));
    }
    if length > MAX_NAME_LENGTH {
        return Err(violation(
            "name_too_long",
            "Name must be less than 50 characters",
        ));
    }
    Ok(())
}

/// All five password checks are mandatory for sign-up. The message reports
/// the first failed check in fixed order.
fn validate_password_complexity(password: &str) -> Result<(), ValidationError> {
    match failed_checks(password).first() {
        None => Ok(()),
        Some(check) => Err(violation("password_complexity", check.violation())),
    }
}

fn validate_terms_accepted(accepted: &bool) -> Result<(), ValidationError> {
    if *accepted {
        Ok(())
    } else {
        Err(violation(
            "terms_not_accepted",
            "You must accept the terms and conditions",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ValidateFields;

    fn valid_input() -> SignUpInput {
        SignUpInput {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "Abcdef1!".to_string(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_valid_registration_accepted() {
        assert!(valid_input().validate_fields().is_ok());
    }

    #[test]
    fn test_name_with_digits_rejected() {
        let mut input = valid_input();
        input.name = "John123".to_string();
        let errors = input.validate_fields().unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some("Name can only contain letters and spaces")
        );
    }

    #[test]
    fn test_single_char_name_rejected() {
        let mut input = valid_input();
        input.name = "J".to_string();
        let errors = input.validate_fields().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let mut input = valid_input();
        input.name = "A".repeat(51);
        let errors = input.validate_fields().unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some("Name must be less than 50 characters")
        );
    }

    #[test]
    fn test_fifty_char_name_accepted() {
        let mut input = valid_input();
        input.name = "A".repeat(50);
        assert!(input.validate_fields().is_ok());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        let errors = input.validate_fields().unwrap_err();
        assert_eq!(
            errors.get("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_password_missing_uppercase_rejected() {
        let mut input = valid_input();
        input.password = "abcdefgh".to_string();
        let errors = input.validate_fields().unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_short_password_reports_length_first() {
        let mut input = valid_input();
        input.password = "Ab1!".to_string();
        let errors = input.validate_fields().unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_terms_not_accepted_rejected() {
        let mut input = valid_input();
        input.terms_accepted = false;
        let errors = input.validate_fields().unwrap_err();
        assert_eq!(
            errors.get("termsAccepted"),
            Some("You must accept the terms and conditions")
        );
    }

    #[test]
    fn test_terms_alone_cause_rejection() {
        // Every other field valid: terms still gate acceptance
        let mut input = valid_input();
        input.terms_accepted = false;
        assert_eq!(input.validate_fields().unwrap_err().len(), 1);
    }

    #[test]
    fn test_all_field_violations_collected() {
        let input = SignUpInput {
            name: "J".to_string(),
            email: "nope".to_string(),
            password: "short".to_string(),
            terms_accepted: false,
        };
        let errors = input.validate_fields().unwrap_err();
        assert_eq!(errors.len(), 4);
        // Field order follows declaration order
        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["name", "email", "password", "termsAccepted"]);
    }
}
