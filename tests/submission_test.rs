//! Integration tests for the submission service and simulated backend.
//!
//! These tests use hand-rolled mock backends to observe what reaches the
//! backend boundary, and a paused tokio clock for the delay behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use auth_forms::domain::{SignInInput, SignUpInput};
use auth_forms::errors::{AppError, AppResult};
use auth_forms::services::{
    AuthBackend, SignInReceipt, SignUpReceipt, SimulatedBackend, SubmissionService, Submitter,
};

// =============================================================================
// Mock Backends for Testing
// =============================================================================

/// Mock backend that counts calls and echoes input
struct RecordingBackend {
    calls: AtomicUsize,
}

impl RecordingBackend {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthBackend for RecordingBackend {
    async fn authenticate(&self, input: &SignInInput) -> AppResult<SignInReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SignInReceipt {
            session_id: Uuid::new_v4(),
            email: input.email.clone(),
            remember_me: input.remember_me,
            signed_in_at: Utc::now(),
        })
    }

    async fn create_account(&self, input: &SignUpInput) -> AppResult<SignUpReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SignUpReceipt {
            account_id: Uuid::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            created_at: Utc::now(),
        })
    }
}

/// Mock backend that always fails
struct FailingBackend;

#[async_trait]
impl AuthBackend for FailingBackend {
    async fn authenticate(&self, _input: &SignInInput) -> AppResult<SignInReceipt> {
        Err(AppError::internal("backend unavailable"))
    }

    async fn create_account(&self, _input: &SignUpInput) -> AppResult<SignUpReceipt> {
        Err(AppError::internal("backend unavailable"))
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn valid_sign_up() -> SignUpInput {
    SignUpInput {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        password: "Abcdef1!".to_string(),
        terms_accepted: true,
    }
}

fn valid_sign_in() -> SignInInput {
    SignInInput {
        email: "john@example.com".to_string(),
        password: "hunter2".to_string(),
        remember_me: true,
    }
}

// =============================================================================
// Submitter Tests
// =============================================================================

#[tokio::test]
async fn test_valid_sign_up_reaches_backend() {
    let backend = Arc::new(RecordingBackend::new());
    let service = Submitter::new(backend.clone());

    let receipt = service.sign_up(valid_sign_up()).await.unwrap();

    assert_eq!(backend.call_count(), 1);
    assert_eq!(receipt.name, "John Doe");
    assert_eq!(receipt.email, "john@example.com");
}

#[tokio::test]
async fn test_rejected_sign_up_never_reaches_backend() {
    let backend = Arc::new(RecordingBackend::new());
    let service = Submitter::new(backend.clone());

    let mut input = valid_sign_up();
    input.terms_accepted = false;
    let result = service.sign_up(input).await;

    assert_eq!(backend.call_count(), 0);
    match result.unwrap_err() {
        AppError::Rejected(fields) => {
            assert_eq!(
                fields.get("termsAccepted"),
                Some("You must accept the terms and conditions")
            );
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sign_in_passes_remember_me_through() {
    let backend = Arc::new(RecordingBackend::new());
    let service = Submitter::new(backend);

    let receipt = service.sign_in(valid_sign_in()).await.unwrap();

    assert!(receipt.remember_me);
    assert_eq!(receipt.email, "john@example.com");
}

#[tokio::test]
async fn test_rejected_sign_in_collects_all_field_errors() {
    let backend = Arc::new(RecordingBackend::new());
    let service = Submitter::new(backend.clone());

    let input = SignInInput {
        email: String::new(),
        password: String::new(),
        remember_me: false,
    };
    let result = service.sign_in(input).await;

    assert_eq!(backend.call_count(), 0);
    match result.unwrap_err() {
        AppError::Rejected(fields) => {
            assert_eq!(fields.get("email"), Some("Email is required"));
            assert_eq!(fields.get("password"), Some("Password is required"));
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_backend_failure_propagates() {
    let service = Submitter::new(Arc::new(FailingBackend));

    let result = service.sign_up(valid_sign_up()).await;

    assert!(matches!(result.unwrap_err(), AppError::Internal(_)));
}

// =============================================================================
// Simulated Backend Tests
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_simulated_backend_waits_the_configured_delay() {
    let backend = SimulatedBackend::new(Duration::from_millis(1500), Duration::from_millis(2000));

    let started = tokio::time::Instant::now();
    backend.authenticate(&valid_sign_in()).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));

    let started = tokio::time::Instant::now();
    backend.create_account(&valid_sign_up()).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(2000));
}

#[tokio::test]
async fn test_simulated_backend_fabricates_distinct_ids() {
    let backend = SimulatedBackend::new(Duration::ZERO, Duration::ZERO);

    let first = backend.create_account(&valid_sign_up()).await.unwrap();
    let second = backend.create_account(&valid_sign_up()).await.unwrap();

    assert_ne!(first.account_id, second.account_id);
}
