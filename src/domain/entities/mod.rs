//! Value types the page chrome is built from.
//!
//! None of these are persisted: every render constructs them fresh and drops
//! them once the page is written out.
//!
//! # Entity Types
//!
//! - [`Brand`] - Store name and glyph
//! - [`NavigationLink`] / [`NavLinks`] - Ordered, unique in-page links
//! - [`NavVariant`] - Which navigation bar markup is mounted
//! - [`CopyrightNotice`] - Footer text for the current year
//! - [`StyleContext`] - Stylesheets and footer colours passed to the renderer

pub mod brand;
pub mod copyright;
pub mod nav_link;
pub mod nav_variant;
pub mod style;

pub use brand::Brand;
pub use copyright::CopyrightNotice;
pub use nav_link::{NavLinks, NavigationLink};
pub use nav_variant::NavVariant;
pub use style::{FooterStyle, StyleContext};
