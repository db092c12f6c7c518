//! Storefront home page handler.

use axum::extract::State;
use axum::response::IntoResponse;

use askama::Template;

use crate::domain::error::LayoutError;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::views::{self, HomeTemplate};

/// Renders the storefront landing page inside the page chrome.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// The body comes from `templates/home.html` and provides the `#home` and
/// `#products` anchors; `templates/layout.html` wraps it with the navigation
/// bar and footer.
pub async fn home_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = HomeTemplate {
        brand: state.layout.brand().name(),
    }
    .render()
    .map_err(LayoutError::from)?;

    let page = state.layout.render_page(body);

    Ok(views::document(&page)?)
}
