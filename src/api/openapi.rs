//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::auth_handler;
use crate::domain::{SignInInput, SignUpInput};
use crate::services::{SignInReceipt, SignUpReceipt};

/// OpenAPI documentation for the Auth Forms service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Auth Forms",
        version = "0.1.0",
        description = "Sign-in/sign-up validation with password-strength scoring over a simulated backend",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::sign_up,
        auth_handler::sign_in,
        auth_handler::password_strength,
    ),
    components(
        schemas(
            SignInInput,
            SignUpInput,
            SignInReceipt,
            SignUpReceipt,
            auth_handler::StrengthRequest,
            auth_handler::StrengthResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Form validation and simulated submission")
    )
)]
pub struct ApiDoc;
