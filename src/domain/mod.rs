//! Domain layer - Core validation rules and scoring logic
//!
//! This module contains the pure validators and the password-strength
//! scorer, independent of infrastructure concerns. All functions here are
//! synchronous, side-effect free, and operate on immutable input structs.

pub mod credentials;
pub mod password_rules;
pub mod registration;
pub mod strength;
pub mod validation;

pub use credentials::SignInInput;
pub use password_rules::{failed_checks, PasswordCheck};
pub use registration::SignUpInput;
pub use strength::{score_password, PasswordStrength, StrengthBand};
pub use validation::{FieldErrors, ValidateFields};
