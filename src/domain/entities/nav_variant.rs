//! Navigation bar variants selectable through configuration.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::LayoutError;

/// Which navigation bar markup the layout mounts.
///
/// The choice is made once when the layout is built and never per render.
/// `Simple` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavVariant {
    /// Sticky bar with brand mark, title and inline link buttons.
    #[default]
    Simple,
    /// Same brand and links plus a collapsible menu for narrow screens.
    Responsive,
}

impl NavVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            NavVariant::Simple => "simple",
            NavVariant::Responsive => "responsive",
        }
    }

    pub fn is_responsive(self) -> bool {
        self == NavVariant::Responsive
    }

    /// Stylesheet carrying this variant's bar styles.
    pub fn stylesheet_href(self) -> &'static str {
        match self {
            NavVariant::Simple => "/static/navbar.css",
            NavVariant::Responsive => "/static/responsive-navbar.css",
        }
    }
}

impl fmt::Display for NavVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavVariant {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(NavVariant::Simple),
            "responsive" => Ok(NavVariant::Responsive),
            _ => Err(LayoutError::UnknownNavVariant(s.to_string())),
        }
    }
}
