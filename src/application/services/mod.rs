//! Services for the application layer.

pub mod layout_service;

pub use layout_service::LayoutService;
