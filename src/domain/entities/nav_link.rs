//! Navigation link entity and the ordered link set shown in the top bar.

use serde::Serialize;

use crate::domain::error::LayoutError;

/// A single navigation entry pointing at an in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationLink {
    label: String,
    target: String,
}

impl NavigationLink {
    /// Creates a link after checking the label is non-empty and the target is
    /// an in-page anchor such as `#home`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyLabel`] for a blank label.
    /// Returns [`LayoutError::InvalidTarget`] if `target` is not `#<fragment>`.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Result<Self, LayoutError> {
        let label = label.into().trim().to_string();
        let target = target.into().trim().to_string();

        if label.is_empty() {
            return Err(LayoutError::EmptyLabel);
        }

        if !target.starts_with('#') || target.len() < 2 || target.contains(char::is_whitespace) {
            return Err(LayoutError::InvalidTarget(target));
        }

        Ok(Self { label, target })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Ordered navigation links, left to right.
///
/// Labels and targets are unique within the set. The default set is
/// Home → `#home`, Products → `#products`; extensions are appended after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavLinks(Vec<NavigationLink>);

impl NavLinks {
    /// The storefront's built-in link set.
    pub fn storefront() -> Self {
        Self(vec![
            NavigationLink {
                label: "Home".to_string(),
                target: "#home".to_string(),
            },
            NavigationLink {
                label: "Products".to_string(),
                target: "#products".to_string(),
            },
        ])
    }

    /// Appends a link, keeping labels and targets unique.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateLabel`] or [`LayoutError::DuplicateTarget`]
    /// when the link collides with an existing entry.
    pub fn push(&mut self, link: NavigationLink) -> Result<(), LayoutError> {
        if self.0.iter().any(|l| l.label == link.label) {
            return Err(LayoutError::DuplicateLabel(link.label));
        }
        if self.0.iter().any(|l| l.target == link.target) {
            return Err(LayoutError::DuplicateTarget(link.target));
        }

        self.0.push(link);
        Ok(())
    }

    /// Returns this set with `extra` appended in order.
    ///
    /// # Errors
    ///
    /// Fails on the first link that would break uniqueness.
    pub fn extended(
        mut self,
        extra: impl IntoIterator<Item = NavigationLink>,
    ) -> Result<Self, LayoutError> {
        for link in extra {
            self.push(link)?;
        }
        Ok(self)
    }

    /// Parses a comma-separated list of `Label=#target` entries.
    ///
    /// Blank entries are skipped, so a trailing comma is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MalformedLink`] for an entry without `=`, or any
    /// error from [`NavigationLink::new`].
    pub fn parse_list(input: &str) -> Result<Vec<NavigationLink>, LayoutError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (label, target) = entry
                    .split_once('=')
                    .ok_or_else(|| LayoutError::MalformedLink(entry.to_string()))?;
                NavigationLink::new(label, target)
            })
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavigationLink> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for NavLinks {
    fn default() -> Self {
        Self::storefront()
    }
}

impl<'a> IntoIterator for &'a NavLinks {
    type Item = &'a NavigationLink;
    type IntoIter = std::slice::Iter<'a, NavigationLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(links: &NavLinks) -> Vec<(&str, &str)> {
        links.iter().map(|l| (l.label(), l.target())).collect()
    }

    #[test]
    fn test_storefront_links_exact_order() {
        let links = NavLinks::storefront();

        assert_eq!(
            pairs(&links),
            vec![("Home", "#home"), ("Products", "#products")]
        );
        assert_eq!(links, NavLinks::default());
    }

    #[test]
    fn test_link_rejects_non_anchor_target() {
        assert!(matches!(
            NavigationLink::new("About", "/about"),
            Err(LayoutError::InvalidTarget(_))
        ));
        assert!(matches!(
            NavigationLink::new("About", "#"),
            Err(LayoutError::InvalidTarget(_))
        ));
        assert!(matches!(
            NavigationLink::new("  ", "#about"),
            Err(LayoutError::EmptyLabel)
        ));
    }

    #[test]
    fn test_extension_appends_after_defaults() {
        let about = NavigationLink::new("About", "#about").unwrap();
        let links = NavLinks::storefront().extended([about]).unwrap();

        assert_eq!(
            pairs(&links),
            vec![
                ("Home", "#home"),
                ("Products", "#products"),
                ("About", "#about")
            ]
        );
    }

    #[test]
    fn test_extension_rejects_duplicates() {
        let same_target = NavigationLink::new("Start", "#home").unwrap();
        let err = NavLinks::storefront().extended([same_target]).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateTarget(t) if t == "#home"));

        let same_label = NavigationLink::new("Products", "#catalog").unwrap();
        let err = NavLinks::storefront().extended([same_label]).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateLabel(l) if l == "Products"));
    }

    #[test]
    fn test_failed_push_leaves_set_unchanged() {
        let mut links = NavLinks::storefront();
        let dup = NavigationLink::new("Home", "#start").unwrap();

        assert!(links.push(dup).is_err());
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_parse_list() {
        let parsed = NavLinks::parse_list(" About = #about , Contact=#contact,").unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].label(), "About");
        assert_eq!(parsed[0].target(), "#about");
        assert_eq!(parsed[1].label(), "Contact");

        assert!(NavLinks::parse_list("").unwrap().is_empty());
        assert!(matches!(
            NavLinks::parse_list("About"),
            Err(LayoutError::MalformedLink(_))
        ));
    }
}
