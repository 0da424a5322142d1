//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{SimulatedBackend, SubmissionService, Submitter};

/// Application state containing the submission service.
#[derive(Clone)]
pub struct AppState {
    /// Validates form input and drives the injected backend
    pub submission: Arc<dyn SubmissionService>,
}

impl AppState {
    /// Create application state with the simulated backend.
    ///
    /// This is the shipped configuration; swap the backend through
    /// [`AppState::new`] when a real one exists.
    pub fn from_config(config: &Config) -> Self {
        let backend = Arc::new(SimulatedBackend::from_config(config));
        Self {
            submission: Arc::new(Submitter::new(backend)),
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(submission: Arc<dyn SubmissionService>) -> Self {
        Self { submission }
    }
}
