//! Fallback handler for paths no route matches.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers unmatched paths with the JSON error body.
///
/// # Response
///
/// ```json
/// {
///   "error": {
///     "code": "not_found",
///     "message": "Page not found",
///     "details": { "path": "/checkout" }
///   }
/// }
/// ```
pub async fn not_found_handler(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::not_found("Page not found", json!({ "path": uri.path() }))
}
