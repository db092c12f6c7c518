//! Explicit style context handed to the page instead of ambient stylesheet imports.

use serde::Serialize;

use crate::domain::entities::NavVariant;

pub const FOOTER_STYLESHEET: &str = "/static/footer.css";

/// Colours of the footer band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterStyle {
    background: String,
    color: String,
}

impl FooterStyle {
    pub fn new(background: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            color: color.into(),
        }
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Default for FooterStyle {
    fn default() -> Self {
        Self::new("#93a1afff", "white")
    }
}

/// Stylesheets and inline styles one page render needs.
///
/// Stylesheets are listed in region order: the active navigation variant's
/// sheet first, then the footer's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleContext {
    stylesheets: Vec<String>,
    footer: FooterStyle,
}

impl StyleContext {
    pub fn for_variant(variant: NavVariant) -> Self {
        Self {
            stylesheets: vec![
                variant.stylesheet_href().to_string(),
                FOOTER_STYLESHEET.to_string(),
            ],
            footer: FooterStyle::default(),
        }
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn footer(&self) -> &FooterStyle {
        &self.footer
    }
}
