//! Submission flow state machine.
//!
//! Tracks one dialog's journey: Idle -> Submitting -> Success, with
//! rejected input parking the flow back in Idle alongside its field
//! errors. Cancelling at any point resets every piece of transient state.

use std::sync::Arc;

use crate::domain::{FieldErrors, SignInInput, SignUpInput, ValidateFields};
use crate::errors::AppResult;
use crate::services::submission::{SignInReceipt, SignUpReceipt, SubmissionService};

/// Current position in the submission flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Submitting,
    Success,
}

/// One dialog's submission lifecycle.
///
/// Validation failures do not advance the flow: the errors are retained and
/// the state stays Idle. Only a validated submit transitions to Submitting,
/// and only a backend success reaches Success.
pub struct SubmissionFlow {
    service: Arc<dyn SubmissionService>,
    state: FlowState,
    errors: Option<FieldErrors>,
}

impl SubmissionFlow {
    pub fn new(service: Arc<dyn SubmissionService>) -> Self {
        Self {
            service,
            state: FlowState::Idle,
            errors: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Field errors from the last rejected submit, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    /// Submit sign-in credentials.
    ///
    /// Returns `Ok(None)` when validation rejected the input (the errors
    /// are retained on the flow), `Ok(Some(receipt))` on success.
    pub async fn submit_sign_in(
        &mut self,
        input: SignInInput,
    ) -> AppResult<Option<SignInReceipt>> {
        if let Err(errors) = input.validate_fields() {
            return Ok(self.reject(errors));
        }

        self.begin_submit();
        match self.service.sign_in(input).await {
            Ok(receipt) => {
                self.succeed();
                Ok(Some(receipt))
            }
            Err(e) => {
                self.cancel();
                Err(e)
            }
        }
    }

    /// Submit a registration. Same contract as [`Self::submit_sign_in`].
    pub async fn submit_sign_up(
        &mut self,
        input: SignUpInput,
    ) -> AppResult<Option<SignUpReceipt>> {
        if let Err(errors) = input.validate_fields() {
            return Ok(self.reject(errors));
        }

        self.begin_submit();
        match self.service.sign_up(input).await {
            Ok(receipt) => {
                self.succeed();
                Ok(Some(receipt))
            }
            Err(e) => {
                self.cancel();
                Err(e)
            }
        }
    }

    /// Acknowledge a displayed success: Success -> Idle.
    pub fn dismiss(&mut self) {
        if self.state == FlowState::Success {
            self.state = FlowState::Idle;
        }
    }

    /// Close the dialog: resets state and errors from any position.
    pub fn cancel(&mut self) {
        self.state = FlowState::Idle;
        self.errors = None;
    }

    fn reject<T>(&mut self, errors: FieldErrors) -> Option<T> {
        tracing::debug!(%errors, "submission rejected by validation");
        self.state = FlowState::Idle;
        self.errors = Some(errors);
        None
    }

    fn begin_submit(&mut self) {
        self.errors = None;
        self.state = FlowState::Submitting;
        tracing::debug!("submitting");
    }

    fn succeed(&mut self) {
        self.state = FlowState::Success;
        tracing::debug!("submission succeeded");
    }
}
