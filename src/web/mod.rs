//! Web layer for browser-facing pages.
//!
//! Renders the page chrome around page content to HTML.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`routes`] - Page route configuration
//! - [`views`] - Templates for the navigation bar, footer and document

pub mod handlers;
pub mod routes;
pub mod views;
