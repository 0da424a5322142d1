//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::domain::ValidateFields;
use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Deserialization failures become a single-message validation error;
/// business-rule rejections carry the full field -> message mapping.
///
/// # Example
///
/// ```rust,ignore
/// use auth_forms::api::extractors::ValidatedJson;
/// use auth_forms::domain::SignInInput;
///
/// async fn sign_in(ValidatedJson(input): ValidatedJson<SignInInput>) {
///     // input is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateFields,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate_fields()?;

        Ok(ValidatedJson(value))
    }
}
