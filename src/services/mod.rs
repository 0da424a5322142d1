//! Application services layer - Submission use cases.
//!
//! Services orchestrate the pure domain validators and the injected
//! asynchronous backend. They depend on abstractions (traits) for
//! dependency inversion, so the simulated backend can later be replaced by
//! a real one without touching validation logic.

mod flow;
mod submission;

pub use flow::{FlowState, SubmissionFlow};
pub use submission::{
    AuthBackend, SignInReceipt, SignUpReceipt, SimulatedBackend, SubmissionService, Submitter,
};
