use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};

use super::AppError;

/// Fallback handler for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    AppError::NotFound(format!(
        "The requested resource '{}' was not found",
        uri.path()
    ))
    .into_response()
}
