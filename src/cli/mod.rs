//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `score` - Score a password from the terminal
//! - `demo` - Drive the submission flow against the simulated backend

pub mod args;

pub use args::{Cli, Commands};
