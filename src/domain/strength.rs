//! Password strength scorer.
//!
//! Advisory only: the score never gates submission. The registration
//! validator enforces the same five checks independently, via the shared
//! [`crate::domain::password_rules`] module.

use crate::config::{POINTS_PER_CHECK, STRONG_THRESHOLD, WEAK_THRESHOLD};
use crate::domain::password_rules::PasswordCheck;

/// Strength classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
}

impl StrengthBand {
    /// Classify a score into its band.
    pub fn from_score(score: u8) -> Self {
        if score < WEAK_THRESHOLD {
            StrengthBand::Weak
        } else if score < STRONG_THRESHOLD {
            StrengthBand::Medium
        } else {
            StrengthBand::Strong
        }
    }
}

impl std::fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthBand::Weak => write!(f, "Weak"),
            StrengthBand::Medium => write!(f, "Medium"),
            StrengthBand::Strong => write!(f, "Strong"),
        }
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    /// Sum of points for satisfied checks; always a multiple of 20 in 0..=100.
    pub score: u8,
    /// Feedback labels for failed checks, in fixed check order.
    pub missing_requirements: Vec<&'static str>,
}

impl PasswordStrength {
    /// Classification band for this score.
    pub fn band(&self) -> StrengthBand {
        StrengthBand::from_score(self.score)
    }
}

/// Score a password against the five checks.
///
/// Each satisfied check contributes exactly [`POINTS_PER_CHECK`] points;
/// each failed check appends its feedback label instead.
pub fn score_password(password: &str) -> PasswordStrength {
    let mut score = 0;
    let mut missing_requirements = Vec::new();

    for check in PasswordCheck::ALL {
        if check.is_met(password) {
            score += POINTS_PER_CHECK;
        } else {
            missing_requirements.push(check.requirement());
        }
    }

    PasswordStrength {
        score,
        missing_requirements,
    }
}
