//! The five password checks shared by the strength scorer and the
//! registration validator.
//!
//! Both consumers must evaluate the same checks in the same order, so the
//! checks live here as a single enumeration. The scorer turns each failed
//! check into a feedback label; the validator turns the first failed check
//! into a rejection message.

use crate::config::MIN_PASSWORD_LENGTH;

/// A single password requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl PasswordCheck {
    /// All checks, in evaluation order. The order is part of the contract:
    /// feedback lists and rejection messages follow it.
    pub const ALL: [PasswordCheck; 5] = [
        PasswordCheck::Length,
        PasswordCheck::Uppercase,
        PasswordCheck::Lowercase,
        PasswordCheck::Digit,
        PasswordCheck::Symbol,
    ];

    /// Whether the password satisfies this check.
    pub fn is_met(&self, password: &str) -> bool {
        match self {
            PasswordCheck::Length => password.chars().count() >= MIN_PASSWORD_LENGTH,
            PasswordCheck::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordCheck::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordCheck::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordCheck::Symbol => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Short feedback label used by the strength scorer.
    pub fn requirement(&self) -> &'static str {
        match self {
            PasswordCheck::Length => "At least 8 characters",
            PasswordCheck::Uppercase => "One uppercase letter",
            PasswordCheck::Lowercase => "One lowercase letter",
            PasswordCheck::Digit => "One number",
            PasswordCheck::Symbol => "One special character",
        }
    }

    /// Full rejection message used by the registration validator.
    pub fn violation(&self) -> &'static str {
        match self {
            PasswordCheck::Length => "Password must be at least 8 characters",
            PasswordCheck::Uppercase => "Password must contain at least one uppercase letter",
            PasswordCheck::Lowercase => "Password must contain at least one lowercase letter",
            PasswordCheck::Digit => "Password must contain at least one number",
            PasswordCheck::Symbol => "Password must contain at least one special character",
        }
    }
}

/// Checks the password fails, preserving [`PasswordCheck::ALL`] order.
pub fn failed_checks(password: &str) -> Vec<PasswordCheck> {
    PasswordCheck::ALL
        .iter()
        .copied()
        .filter(|check| !check.is_met(password))
        .collect()
}
