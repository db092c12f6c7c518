//! Errors raised while building or rendering page chrome.

/// Errors that can occur while assembling navigation links, parsing layout
/// options or rendering a page tree to HTML.
///
/// Composition itself never fails: every variant here is either a
/// configuration mistake caught at startup or a template failure.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Duplicate navigation label: {0}")]
    DuplicateLabel(String),

    #[error("Duplicate navigation target: {0}")]
    DuplicateTarget(String),

    #[error("Navigation target must be an in-page anchor starting with '#', got '{0}'")]
    InvalidTarget(String),

    #[error("Navigation label must not be empty")]
    EmptyLabel,

    #[error("Malformed navigation link entry '{0}', expected 'Label=#target'")]
    MalformedLink(String),

    #[error("Unknown navigation variant '{0}', expected 'simple' or 'responsive'")]
    UnknownNavVariant(String),

    #[error("Failed to render template: {0}")]
    Render(#[from] askama::Error),
}
