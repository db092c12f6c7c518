//! Layout orchestration service.

use std::sync::Arc;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::{Brand, CopyrightNotice, NavLinks, NavVariant, StyleContext};
use crate::domain::page::{Footer, NavigationBar, PageTree, Slot};

/// Composes the page shell: navigation bar, caller content, footer.
///
/// The navigation variant, brand and link set are fixed at construction.
/// Every call builds a fresh tree; nothing is cached between renders, so the
/// footer year always reflects the clock at the moment of the call.
pub struct LayoutService {
    variant: NavVariant,
    brand: Brand,
    links: NavLinks,
    clock: Arc<dyn Clock>,
}

impl LayoutService {
    /// Creates a layout service.
    ///
    /// # Arguments
    ///
    /// - `variant` - Navigation bar markup to mount
    /// - `brand` - Store name and glyph
    /// - `links` - Ordered navigation links
    /// - `clock` - Date source for the footer
    pub fn new(variant: NavVariant, brand: Brand, links: NavLinks, clock: Arc<dyn Clock>) -> Self {
        Self {
            variant,
            brand,
            links,
            clock,
        }
    }

    /// Default storefront chrome (simple bar, "Store Front", Home/Products)
    /// reading the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::new(
            NavVariant::default(),
            Brand::default(),
            NavLinks::storefront(),
            clock,
        )
    }

    /// Mounts `variant` instead of the current navigation bar.
    pub fn with_variant(mut self, variant: NavVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn variant(&self) -> NavVariant {
        self.variant
    }

    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    /// Builds the navigation bar for the active variant.
    pub fn navigation_bar(&self) -> NavigationBar {
        NavigationBar::new(self.variant, self.brand.clone(), self.links.clone())
    }

    /// Builds the footer, reading the clock now.
    pub fn footer(&self) -> Footer {
        let notice = CopyrightNotice::for_date(&self.brand, self.clock.today());
        Footer::new(notice, StyleContext::for_variant(self.variant).footer().clone())
    }

    /// Wraps `content` in the page shell.
    ///
    /// The resulting tree's regions are always navigation, content, footer.
    pub fn render_page(&self, content: impl Into<Slot>) -> PageTree {
        let style = StyleContext::for_variant(self.variant);
        let nav = self.navigation_bar();
        let footer = self.footer();

        tracing::debug!(
            variant = %self.variant,
            links = nav.links().len(),
            year = footer.notice().year(),
            "Composing page"
        );

        PageTree::compose(nav, content.into(), footer, style)
    }
}

impl Default for LayoutService {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::page::{Region, RegionKind};
    use chrono::NaiveDate;

    fn service_on(y: i32, m: u32, d: u32) -> LayoutService {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        LayoutService::with_clock(Arc::new(FixedClock::new(date)))
    }

    #[test]
    fn test_default_variant_is_simple() {
        let service = service_on(2024, 6, 1);
        assert_eq!(service.variant(), NavVariant::Simple);
        assert_eq!(LayoutService::default().variant(), NavVariant::Simple);
    }

    #[test]
    fn test_render_page_order_for_every_variant() {
        for variant in [NavVariant::Simple, NavVariant::Responsive] {
            let page = service_on(2024, 6, 1)
                .with_variant(variant)
                .render_page("<p>Welcome</p>");

            let kinds: Vec<RegionKind> = page.regions().iter().map(|r| r.kind()).collect();
            assert_eq!(
                kinds,
                [RegionKind::Navigation, RegionKind::Content, RegionKind::Footer]
            );
            assert_eq!(page.nav().variant(), variant);
        }
    }

    #[test]
    fn test_navigation_links_fixed() {
        let nav = service_on(2024, 6, 1).navigation_bar();
        let links: Vec<(&str, &str)> = nav.links().iter().map(|l| (l.label(), l.target())).collect();

        assert_eq!(links, [("Home", "#home"), ("Products", "#products")]);
        assert_eq!(nav.brand().name(), "Store Front");
    }

    #[test]
    fn test_footer_year_from_clock() {
        let footer = service_on(2030, 1, 1).footer();
        assert_eq!(footer.notice().to_string(), "© Store Front 2030");
    }

    #[test]
    fn test_rerender_is_identical() {
        let service = service_on(2024, 6, 1);

        assert_eq!(service.navigation_bar(), service.navigation_bar());
        assert_eq!(service.footer(), service.footer());
        assert_eq!(service.render_page("<p>x</p>"), service.render_page("<p>x</p>"));
    }

    #[test]
    fn test_scenario_welcome_page() {
        let page = service_on(2024, 6, 1).render_page("<p>Welcome</p>");

        let [nav, content, footer] = page.regions();
        match (nav, content, footer) {
            (Region::Navigation(nav), Region::Content(slot), Region::Footer(footer)) => {
                let labels: Vec<&str> = nav.links().iter().map(|l| l.label()).collect();
                assert_eq!(labels, ["Home", "Products"]);
                assert_eq!(slot.as_html(), "<p>Welcome</p>");
                assert_eq!(footer.notice().to_string(), "© Store Front 2024");
            }
            _ => panic!("regions out of order"),
        }
    }

    #[test]
    fn test_style_context_follows_variant() {
        let page = service_on(2024, 6, 1)
            .with_variant(NavVariant::Responsive)
            .render_page("");

        assert_eq!(
            page.style().stylesheets()[0],
            NavVariant::Responsive.stylesheet_href()
        );
    }
}
