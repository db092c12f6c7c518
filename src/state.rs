use std::sync::Arc;

use crate::application::services::LayoutService;

/// Shared state handed to every handler.
///
/// The layout service is immutable after startup, so requests share it
/// without locking and each render builds its own page tree.
#[derive(Clone)]
pub struct AppState {
    pub layout: Arc<LayoutService>,
}

impl AppState {
    pub fn new(layout: Arc<LayoutService>) -> Self {
        Self { layout }
    }
}
