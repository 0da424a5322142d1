//! Authentication form handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{score_password, PasswordStrength, SignInInput, SignUpInput};
use crate::errors::AppResult;
use crate::services::{SignInReceipt, SignUpReceipt};

/// Password strength request
#[derive(Debug, Deserialize, ToSchema)]
pub struct StrengthRequest {
    /// Candidate password to score
    #[schema(example = "Abcdef1!")]
    pub password: String,
}

/// Password strength response
#[derive(Debug, Serialize, ToSchema)]
pub struct StrengthResponse {
    /// Score in 20-point steps, 0 to 100
    #[schema(example = 100)]
    pub score: u8,
    /// Classification band derived from the score
    #[schema(example = "Strong")]
    pub band: String,
    /// Labels for unmet requirements, in fixed check order
    #[schema(example = json!([]))]
    pub missing_requirements: Vec<String>,
}

impl From<PasswordStrength> for StrengthResponse {
    fn from(strength: PasswordStrength) -> Self {
        Self {
            band: strength.band().to_string(),
            missing_requirements: strength
                .missing_requirements
                .iter()
                .map(|label| label.to_string())
                .collect(),
            score: strength.score,
        }
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/password-strength", post(password_strength))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/auth/sign-up",
    tag = "Authentication",
    request_body = SignUpInput,
    responses(
        (status = 201, description = "Account created", body = SignUpReceipt),
        (status = 400, description = "Validation error with per-field messages")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<SignUpInput>,
) -> AppResult<(StatusCode, Json<SignUpReceipt>)> {
    let receipt = state.submission.sign_up(input).await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Sign in with existing credentials
#[utoipa::path(
    post,
    path = "/auth/sign-in",
    tag = "Authentication",
    request_body = SignInInput,
    responses(
        (status = 200, description = "Signed in", body = SignInReceipt),
        (status = 400, description = "Validation error with per-field messages")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<SignInInput>,
) -> AppResult<Json<SignInReceipt>> {
    let receipt = state.submission.sign_in(input).await?;

    Ok(Json(receipt))
}

/// Score a candidate password
///
/// Advisory only: scoring never gates submission. The sign-up validator
/// enforces the same five checks on its own.
#[utoipa::path(
    post,
    path = "/auth/password-strength",
    tag = "Authentication",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Strength score and missing requirements", body = StrengthResponse)
    )
)]
pub async fn password_strength(
    Json(request): Json<StrengthRequest>,
) -> Json<StrengthResponse> {
    Json(StrengthResponse::from(score_password(&request.password)))
}
