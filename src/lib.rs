//! # Storefront
//!
//! Server-rendered page chrome for a storefront: a top navigation bar, a
//! footer, and the layout that composes them around page content.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Chrome value types and the [`domain::page::PageTree`]
//! - **Application Layer** ([`application`]) - [`LayoutService`], the layout orchestrator
//! - **API Layer** ([`api`]) - JSON description of composed pages, health check
//! - **Web Layer** ([`web`]) - Askama templates and HTML page handlers
//!
//! ## Composition
//!
//! Every page is the ordered triple navigation, content, footer. The
//! navigation variant (`simple` or `responsive`) is picked once from
//! configuration; the order holds for both.
//!
//! ```ignore
//! use storefront::prelude::*;
//!
//! let layout = LayoutService::default();
//! let page = layout.render_page("<p>Welcome</p>");
//! let html = storefront::web::views::render_html(&page)?;
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use application::services::LayoutService;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LayoutService;
    pub use crate::domain::clock::{Clock, FixedClock, SystemClock};
    pub use crate::domain::entities::{Brand, NavLinks, NavVariant, NavigationLink};
    pub use crate::domain::error::LayoutError;
    pub use crate::domain::page::{Footer, NavigationBar, PageTree, Region, RegionKind, Slot};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
