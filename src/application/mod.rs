//! Application layer: orchestrates domain values into a composed page.
//!
//! # Available Services
//!
//! - [`services::layout_service::LayoutService`] - Builds the navigation bar,
//!   footer and full page tree around caller content

pub mod services;
