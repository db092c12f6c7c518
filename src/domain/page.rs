//! Page tree: the composed chrome around one piece of page content.
//!
//! A [`PageTree`] always holds exactly one navigation bar, one content slot
//! and one footer. [`PageTree::regions`] yields them in display order, which
//! is fixed as navigation, content, footer for every navigation variant.

use serde::Serialize;

use crate::domain::entities::{
    Brand, CopyrightNotice, FooterStyle, NavLinks, NavVariant, StyleContext,
};

/// Opaque caller-supplied HTML placed between the navigation bar and footer.
///
/// The fragment is inserted verbatim; it is the caller's job to make it safe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot(String);

impl Slot {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }
}

impl From<String> for Slot {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for Slot {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

/// Top navigation bar: brand mark, title and links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationBar {
    variant: NavVariant,
    brand: Brand,
    links: NavLinks,
}

impl NavigationBar {
    pub fn new(variant: NavVariant, brand: Brand, links: NavLinks) -> Self {
        Self {
            variant,
            brand,
            links,
        }
    }

    pub fn variant(&self) -> NavVariant {
        self.variant
    }

    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    pub fn links(&self) -> &NavLinks {
        &self.links
    }
}

/// Bottom band carrying the copyright notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    notice: CopyrightNotice,
    style: FooterStyle,
}

impl Footer {
    pub fn new(notice: CopyrightNotice, style: FooterStyle) -> Self {
        Self { notice, style }
    }

    pub fn notice(&self) -> &CopyrightNotice {
        &self.notice
    }

    pub fn style(&self) -> &FooterStyle {
        &self.style
    }
}

/// Kind of a page region, used when describing the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Navigation,
    Content,
    Footer,
}

/// Borrowed view of one region of a [`PageTree`].
#[derive(Debug, Clone, Copy)]
pub enum Region<'a> {
    Navigation(&'a NavigationBar),
    Content(&'a Slot),
    Footer(&'a Footer),
}

impl Region<'_> {
    pub fn kind(&self) -> RegionKind {
        match self {
            Region::Navigation(_) => RegionKind::Navigation,
            Region::Content(_) => RegionKind::Content,
            Region::Footer(_) => RegionKind::Footer,
        }
    }
}

/// The ordered triple (navigation, content, footer) plus its style context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTree {
    nav: NavigationBar,
    content: Slot,
    footer: Footer,
    style: StyleContext,
}

impl PageTree {
    /// Wraps `content` with exactly one navigation bar and one footer.
    pub fn compose(nav: NavigationBar, content: Slot, footer: Footer, style: StyleContext) -> Self {
        Self {
            nav,
            content,
            footer,
            style,
        }
    }

    /// Regions in display order: navigation, content, footer.
    pub fn regions(&self) -> [Region<'_>; 3] {
        [
            Region::Navigation(&self.nav),
            Region::Content(&self.content),
            Region::Footer(&self.footer),
        ]
    }

    pub fn nav(&self) -> &NavigationBar {
        &self.nav
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }
}
