//! Askama views turning a [`PageTree`] into an HTML document.
//!
//! Each region renders through its own template; the document template then
//! places the rendered fragments in region order and links the page's
//! stylesheets in the head.

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::error::LayoutError;
use crate::domain::page::{Footer, NavigationBar, PageTree, Region};

#[derive(Template)]
#[template(path = "nav_simple.html")]
struct SimpleNavTemplate<'a> {
    nav: &'a NavigationBar,
}

#[derive(Template)]
#[template(path = "nav_responsive.html")]
struct ResponsiveNavTemplate<'a> {
    nav: &'a NavigationBar,
}

#[derive(Template)]
#[template(path = "footer.html")]
struct FooterTemplate<'a> {
    footer: &'a Footer,
}

/// Full HTML document around pre-rendered region fragments.
#[derive(Template, WebTemplate)]
#[template(path = "layout.html")]
pub struct DocumentTemplate {
    pub title: String,
    pub stylesheets: Vec<String>,
    pub regions: Vec<String>,
}

/// Demo storefront body with the `#home` and `#products` anchors the
/// navigation links point at.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub brand: &'a str,
}

/// Renders the navigation bar using the markup of its variant.
pub fn render_navigation(nav: &NavigationBar) -> Result<String, LayoutError> {
    let html = if nav.variant().is_responsive() {
        ResponsiveNavTemplate { nav }.render()?
    } else {
        SimpleNavTemplate { nav }.render()?
    };
    Ok(html)
}

/// Renders the footer band with its copyright notice.
pub fn render_footer(footer: &Footer) -> Result<String, LayoutError> {
    Ok(FooterTemplate { footer }.render()?)
}

/// Renders one region to an HTML fragment.
///
/// Content slots are emitted verbatim inside `<main>`.
pub fn render_region(region: &Region<'_>) -> Result<String, LayoutError> {
    match region {
        Region::Navigation(nav) => render_navigation(nav),
        Region::Content(slot) => Ok(format!(
            "<main class=\"sf-content\">{}</main>",
            slot.as_html()
        )),
        Region::Footer(footer) => render_footer(footer),
    }
}

/// Builds the document template for a page tree.
///
/// # Errors
///
/// Returns [`LayoutError::Render`] if a region template fails.
pub fn document(page: &PageTree) -> Result<DocumentTemplate, LayoutError> {
    let regions = page
        .regions()
        .iter()
        .map(render_region)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DocumentTemplate {
        title: page.nav().brand().name().to_string(),
        stylesheets: page.style().stylesheets().to_vec(),
        regions,
    })
}

/// Renders a page tree to a complete HTML document string.
///
/// # Errors
///
/// Returns [`LayoutError::Render`] if any template fails.
pub fn render_html(page: &PageTree) -> Result<String, LayoutError> {
    Ok(document(page)?.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::LayoutService;
    use crate::domain::clock::FixedClock;
    use crate::domain::entities::NavVariant;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn service(variant: NavVariant) -> LayoutService {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        LayoutService::with_clock(Arc::new(FixedClock::new(date))).with_variant(variant)
    }

    fn anchors(html: &str) -> Vec<&str> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .filter(|href| href.starts_with('#'))
            .collect()
    }

    #[test]
    fn test_simple_nav_links() {
        let html = render_navigation(&service(NavVariant::Simple).navigation_bar()).unwrap();

        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(anchors(&html), ["#home", "#products"]);
        assert!(html.find(">Home<").unwrap() < html.find(">Products<").unwrap());
        assert!(html.contains("Store Front"));
    }

    #[test]
    fn test_responsive_nav_has_same_links() {
        let html = render_navigation(&service(NavVariant::Responsive).navigation_bar()).unwrap();

        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(anchors(&html), ["#home", "#products"]);
        assert!(html.contains("sf-nav--responsive"));
    }

    #[test]
    fn test_footer_text() {
        let html = render_footer(&service(NavVariant::Simple).footer()).unwrap();

        assert!(html.contains("© Store Front 2024"));
        assert!(html.contains("#93a1afff"));
    }

    #[test]
    fn test_document_order() {
        let page = service(NavVariant::Simple).render_page("<p>Welcome</p>");
        let html = render_html(&page).unwrap();

        let nav = html.find("<header").unwrap();
        let content = html.find("<p>Welcome</p>").unwrap();
        let footer = html.find("© Store Front 2024").unwrap();

        assert!(nav < content);
        assert!(content < footer);
    }

    #[test]
    fn test_document_links_stylesheets() {
        let page = service(NavVariant::Responsive).render_page("");
        let html = render_html(&page).unwrap();

        let nav_sheet = html.find("/static/responsive-navbar.css").unwrap();
        let footer_sheet = html.find("/static/footer.css").unwrap();
        assert!(nav_sheet < footer_sheet);
        assert!(!html.contains("/static/navbar.css"));
    }

    #[test]
    fn test_brand_is_escaped() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let service = LayoutService::new(
            NavVariant::Simple,
            crate::domain::entities::Brand::new("<b>Shop</b>"),
            crate::domain::entities::NavLinks::storefront(),
            Arc::new(FixedClock::new(date)),
        );
        let html = render_navigation(&service.navigation_bar()).unwrap();

        assert!(!html.contains("<b>Shop</b>"));
        assert!(html.contains("&lt;b&gt;Shop"));
    }
}
