//! Domain layer: the chrome value types and the page tree they compose into.
//!
//! # Architecture
//!
//! - [`entities`] - Brand, navigation links, nav variant, copyright, style context
//! - [`page`] - [`page::PageTree`] and its regions
//! - [`clock`] - Date source for the footer year
//! - [`error`] - [`error::LayoutError`]
//!
//! Nothing here touches HTTP or templates; rendering lives in [`crate::web`].

pub mod clock;
pub mod entities;
pub mod error;
pub mod page;
