use super::html::{to_html, wrap_preformatted};
use super::ExportError;
use crate::engine::{reconstruct, AnnotatedSpan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// HTML with a plain-text alternative
    RichText,
    /// The clipboard refused HTML; only the plain text was copied
    PlainText,
}

impl CopyOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CopyOutcome::RichText => "Copied rich text to clipboard",
            CopyOutcome::PlainText => "Copied as plain text (rich text not supported)",
        }
    }
}

/// Copies the annotated text as HTML, falling back to plain text.
pub fn copy_rich_text(spans: &[AnnotatedSpan<'_>]) -> Result<CopyOutcome, ExportError> {
    let html = wrap_preformatted(&to_html(spans));
    let plain = reconstruct(spans);

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;

    match clipboard.set_html(html.as_str(), Some(plain.as_str())) {
        Ok(()) => {
            log::info!("copied {} bytes of rich text", html.len());
            Ok(CopyOutcome::RichText)
        }
        Err(err) => {
            log::warn!("rich text copy failed ({}), falling back to plain text", err);
            clipboard
                .set_text(plain)
                .map_err(|e| ExportError::Clipboard(e.to_string()))?;
            Ok(CopyOutcome::PlainText)
        }
    }
}
