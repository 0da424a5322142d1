//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Auth Forms - sign-in/sign-up validation with strength scoring
#[derive(Parser, Debug)]
#[command(name = "auth-forms")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Score a password and print its missing requirements
    Score(ScoreArgs),

    /// Run a sign-up through the submission flow
    Demo(DemoArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the score command
#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Password to score
    pub password: String,
}

/// Arguments for the demo command
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Display name to register
    #[arg(long, default_value = "John Doe")]
    pub name: String,

    /// Email address to register
    #[arg(long, default_value = "john@example.com")]
    pub email: String,

    /// Password to register
    #[arg(long, default_value = "Abcdef1!")]
    pub password: String,

    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,
}
