//! Storefront page route configuration.

use crate::state::AppState;
use crate::web::handlers::home_handler;
use axum::{Router, routing::get};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET /` - Storefront landing page wrapped in the page chrome
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}
