//! Handler describing the composed page as JSON.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::layout::{LayoutQuery, LayoutResponse};
use crate::state::AppState;

/// Composes a page around the optional `content` fragment and describes it.
///
/// # Endpoint
///
/// `GET /api/layout?content=<html>`
///
/// # Response
///
/// ```json
/// {
///   "nav_variant": "simple",
///   "stylesheets": ["/static/navbar.css", "/static/footer.css"],
///   "regions": [
///     { "kind": "navigation", "brand": "Store Front", "icon": "/static/storefront.svg",
///       "links": [{ "label": "Home", "target": "#home" }, { "label": "Products", "target": "#products" }] },
///     { "kind": "content", "html": "<p>Welcome</p>" },
///     { "kind": "footer", "text": "© Store Front 2024", "year": 2024 }
///   ]
/// }
/// ```
pub async fn layout_handler(
    State(state): State<AppState>,
    Query(query): Query<LayoutQuery>,
) -> Json<LayoutResponse> {
    let page = state.layout.render_page(query.content.unwrap_or_default());

    Json(LayoutResponse::from(&page))
}
