//! Submission service - validates form input and hands it to the backend.
//!
//! The backend is an injected async collaborator. The shipped
//! implementation only simulates a round trip with a timed delay, but the
//! trait boundary is exactly where a real authentication call would slot in.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{SignInInput, SignUpInput, ValidateFields};
use crate::errors::AppResult;

/// Receipt returned after a successful sign-in.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignInReceipt {
    /// Session identifier minted by the backend
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub session_id: Uuid,
    /// Email the session was opened for
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Whether the session outlives the browser
    pub remember_me: bool,
    /// Sign-in timestamp
    pub signed_in_at: DateTime<Utc>,
}

/// Receipt returned after a successful registration.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignUpReceipt {
    /// Account identifier minted by the backend
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub account_id: Uuid,
    /// Registered display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Registered email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Asynchronous authentication backend.
///
/// Implementations receive already-validated input.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Open a session for the given credentials.
    async fn authenticate(&self, input: &SignInInput) -> AppResult<SignInReceipt>;

    /// Create an account for the given registration.
    async fn create_account(&self, input: &SignUpInput) -> AppResult<SignUpReceipt>;
}

/// Backend stand-in that sleeps for a configured delay and fabricates a
/// receipt. Never fails.
pub struct SimulatedBackend {
    sign_in_delay: Duration,
    sign_up_delay: Duration,
}

impl SimulatedBackend {
    pub fn new(sign_in_delay: Duration, sign_up_delay: Duration) -> Self {
        Self {
            sign_in_delay,
            sign_up_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.sign_in_delay(), config.sign_up_delay())
    }
}

#[async_trait]
impl AuthBackend for SimulatedBackend {
    async fn authenticate(&self, input: &SignInInput) -> AppResult<SignInReceipt> {
        tokio::time::sleep(self.sign_in_delay).await;
        Ok(SignInReceipt {
            session_id: Uuid::new_v4(),
            email: input.email.clone(),
            remember_me: input.remember_me,
            signed_in_at: Utc::now(),
        })
    }

    async fn create_account(&self, input: &SignUpInput) -> AppResult<SignUpReceipt> {
        tokio::time::sleep(self.sign_up_delay).await;
        Ok(SignUpReceipt {
            account_id: Uuid::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            created_at: Utc::now(),
        })
    }
}

/// Submission service trait for dependency injection.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Validate credentials and sign in through the backend.
    async fn sign_in(&self, input: SignInInput) -> AppResult<SignInReceipt>;

    /// Validate a registration and create the account through the backend.
    async fn sign_up(&self, input: SignUpInput) -> AppResult<SignUpReceipt>;
}

/// Concrete submission service over an injected backend.
///
/// Rejected input never reaches the backend.
pub struct Submitter<B: AuthBackend> {
    backend: Arc<B>,
}

impl<B: AuthBackend> Submitter<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl<B: AuthBackend> SubmissionService for Submitter<B> {
    async fn sign_in(&self, input: SignInInput) -> AppResult<SignInReceipt> {
        input.validate_fields()?;
        tracing::debug!(email = %input.email, "credentials accepted, contacting backend");
        self.backend.authenticate(&input).await
    }

    async fn sign_up(&self, input: SignUpInput) -> AppResult<SignUpReceipt> {
        input.validate_fields()?;
        tracing::debug!(email = %input.email, "registration accepted, contacting backend");
        self.backend.create_account(&input).await
    }
}
