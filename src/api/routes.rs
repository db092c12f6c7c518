//! API route configuration.

use crate::api::handlers::layout_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET /layout` - Ordered description of the composed page
pub fn routes() -> Router<AppState> {
    Router::new().route("/layout", get(layout_handler))
}
