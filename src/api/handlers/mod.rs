//! HTTP request handlers for API endpoints.

pub mod health;
pub mod layout;
pub mod not_found;

pub use health::health_handler;
pub use layout::layout_handler;
pub use not_found::not_found_handler;
