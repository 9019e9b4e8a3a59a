use crate::app::mode::AppMode;
use crate::engine::{AnnotationConfig, Fragment, ReaderConfig};

/// Render state for UI components
pub struct RenderState<'a> {
    pub mode: AppMode,
    pub fragments: &'a [Fragment],
    pub scroll: usize,
    pub source: Option<&'a str>,
    pub status: Option<&'a str>,
    pub command_input: &'a str,
    pub annotation: AnnotationConfig,
    pub reader: ReaderConfig,
}

impl<'a> RenderState<'a> {
    /// Whether a document is loaded at all
    pub fn has_document(&self) -> bool {
        self.source.is_some()
    }
}
