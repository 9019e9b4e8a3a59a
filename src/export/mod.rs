//! Renderers for annotated text
//!
//! Each format turns a span sequence into a string with two visual
//! treatments: focus (bold) and faded (plain or dim).
//!
//! - **html.rs**: `<strong>` markup, as pasted into rich-text editors
//! - **markdown.rs**: `**focus**faded`
//! - **ansi.rs**: terminal escapes for piping to a pager
//! - **clipboard.rs**: rich-text copy with a plain-text fallback

use crate::engine::AnnotatedSpan;
use std::path::Path;
use thiserror::Error;

pub mod ansi;
pub mod clipboard;
pub mod html;
pub mod markdown;

pub use ansi::to_ansi;
pub use clipboard::{copy_rich_text, CopyOutcome};
pub use html::{to_html, wrap_preformatted};
pub use markdown::to_markdown;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output formats for batch export and `:w`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// HTML fragment with <strong> around each focus span
    Html,
    /// Markdown with **focus** spans
    Markdown,
    /// Bold/dim terminal escapes
    Ansi,
}

impl Format {
    /// Picks a format from a file extension, if it names one.
    pub fn from_path(path: &str) -> Option<Format> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        match extension.as_str() {
            "html" | "htm" => Some(Format::Html),
            "md" | "markdown" => Some(Format::Markdown),
            "ans" | "ansi" => Some(Format::Ansi),
            _ => None,
        }
    }
}

pub fn render(format: Format, spans: &[AnnotatedSpan<'_>]) -> String {
    match format {
        Format::Html => to_html(spans),
        Format::Markdown => to_markdown(spans),
        Format::Ansi => to_ansi(spans),
    }
}

/// Output for a file or stdout: like [`render`], but HTML keeps its line
/// breaks inside a `white-space: pre-wrap` block.
pub fn render_standalone(format: Format, spans: &[AnnotatedSpan<'_>]) -> String {
    match format {
        Format::Html => wrap_preformatted(&to_html(spans)),
        _ => render(format, spans),
    }
}

/// Renders and writes to `path`, returning the number of bytes written.
pub fn write_to_path(
    path: &str,
    format: Format,
    spans: &[AnnotatedSpan<'_>],
) -> Result<usize, ExportError> {
    let rendered = render_standalone(format, spans);
    std::fs::write(path, &rendered)?;
    log::info!("exported {:?} to {} ({} bytes)", format, path, rendered.len());
    Ok(rendered.len())
}
