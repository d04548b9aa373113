//! JSON body extractor that reports failures in the standard error format.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON request body extractor.
///
/// Behaves like [`axum::Json`] but rejects with [`AppError::JsonExtractorRejection`],
/// so malformed bodies produce an [`ErrorResponse`](crate::errors::ErrorResponse)
/// while keeping axum's status code (400, 415 or 422). No validation is applied.
///
/// # Example
/// ```ignore
/// use axum::routing::post;
/// use axum_helpers::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<serde_json::Value>) -> String {
///     payload.to_string()
/// }
///
/// let app = axum::Router::new().route("/", post(create));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}
