//! Demo command - Runs a sign-up through the submission flow.
//!
//! Useful for watching the flow transitions and the simulated backend
//! delay without starting the server.

use std::sync::Arc;

use crate::cli::args::DemoArgs;
use crate::config::Config;
use crate::domain::SignUpInput;
use crate::errors::AppResult;
use crate::services::{FlowState, SimulatedBackend, SubmissionFlow, Submitter};

/// Execute the demo command
pub async fn execute(args: DemoArgs, config: Config) -> AppResult<()> {
    let backend = Arc::new(SimulatedBackend::from_config(&config));
    let service = Arc::new(Submitter::new(backend));
    let mut flow = SubmissionFlow::new(service);

    let input = SignUpInput {
        name: args.name,
        email: args.email,
        password: args.password,
        terms_accepted: args.accept_terms,
    };

    tracing::info!(state = ?flow.state(), "flow ready");

    match flow.submit_sign_up(input).await? {
        Some(receipt) => {
            tracing::info!(state = ?flow.state(), account_id = %receipt.account_id, "account created");

            // Hold the success state for the configured display duration,
            // then reset, mirroring the dialog's auto-dismiss.
            tokio::time::sleep(config.success_display()).await;
            flow.dismiss();
            tracing::info!(state = ?flow.state(), "flow reset");
        }
        None => {
            debug_assert_eq!(flow.state(), FlowState::Idle);
            if let Some(errors) = flow.field_errors() {
                for (field, message) in errors.iter() {
                    println!("{}: {}", field, message);
                }
            }
        }
    }

    Ok(())
}
