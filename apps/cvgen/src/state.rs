use std::sync::Arc;

use crate::render::DocumentEngine;
use crate::template::TemplateStyle;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable document backend. Default: DocxEngine.
    pub engine: Arc<dyn DocumentEngine>,
    /// Fonts, colors and page chrome applied to every generated CV.
    pub style: Arc<TemplateStyle>,
}
