//! DTOs describing a composed page.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NavVariant, NavigationLink};
use crate::domain::page::{PageTree, Region};

/// Query parameters for `GET /api/layout`.
#[derive(Debug, Default, Deserialize)]
pub struct LayoutQuery {
    /// HTML fragment to place in the content slot.
    pub content: Option<String>,
}

/// Ordered description of a page tree.
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub nav_variant: NavVariant,
    pub stylesheets: Vec<String>,
    pub regions: Vec<RegionDto>,
}

/// One page region, tagged with its kind.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RegionDto {
    Navigation {
        brand: String,
        icon: String,
        links: Vec<NavigationLink>,
    },
    Content {
        html: String,
    },
    Footer {
        text: String,
        year: i32,
    },
}

impl From<Region<'_>> for RegionDto {
    fn from(region: Region<'_>) -> Self {
        match region {
            Region::Navigation(nav) => RegionDto::Navigation {
                brand: nav.brand().name().to_string(),
                icon: nav.brand().icon_href().to_string(),
                links: nav.links().iter().cloned().collect(),
            },
            Region::Content(slot) => RegionDto::Content {
                html: slot.as_html().to_string(),
            },
            Region::Footer(footer) => RegionDto::Footer {
                text: footer.notice().to_string(),
                year: footer.notice().year(),
            },
        }
    }
}

impl From<&PageTree> for LayoutResponse {
    fn from(page: &PageTree) -> Self {
        Self {
            nav_variant: page.nav().variant(),
            stylesheets: page.style().stylesheets().to_vec(),
            regions: page.regions().into_iter().map(RegionDto::from).collect(),
        }
    }
}
