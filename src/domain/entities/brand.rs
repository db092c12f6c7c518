//! Store brand shown in the navigation bar and footer.

use serde::Serialize;

pub const DEFAULT_BRAND_NAME: &str = "Store Front";
pub const DEFAULT_BRAND_ICON: &str = "/static/storefront.svg";

/// Brand identity: display name and the glyph rendered beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    name: String,
    icon_href: String,
}

impl Brand {
    /// Creates a brand with the default storefront glyph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_href: DEFAULT_BRAND_ICON.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon_href(&self) -> &str {
        &self.icon_href
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND_NAME)
    }
}
