//! HTML page handlers for the storefront.

mod home;

pub use home::home_handler;
