//! Auth Forms - sign-in/sign-up validation with password-strength scoring
//!
//! This crate provides two pure validators (credentials and registration),
//! a password-strength scorer, and a submission flow that drives validated
//! input through an injected asynchronous backend. The shipped backend is
//! simulated: it sleeps a configured delay and fabricates a receipt.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Pure validators, password rules, strength scorer
//! - **services**: Submission service, backend trait, flow state machine
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Score a password
//! cargo run -- score 'Abcdef1!'
//!
//! # Drive the submission flow end to end
//! cargo run -- demo --accept-terms
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{
    score_password, FieldErrors, PasswordStrength, SignInInput, SignUpInput, StrengthBand,
    ValidateFields,
};
pub use errors::{AppError, AppResult};
