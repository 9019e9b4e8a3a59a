use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw text ready for annotation plus a label describing where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

/// Loads a document, choosing the reader by file extension.
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let doc = match extension.as_str() {
        "txt" | "text" | "md" => text::load(path)?,
        "pdf" => pdf::load(path)?,
        "epub" => epub::load(path)?,
        _ => return Err(LoadError::UnsupportedFormat(path.to_string())),
    };

    log::info!("loaded {} ({} bytes)", doc.source, doc.text.len());
    Ok(doc)
}

/// Reads a whole stream, e.g. stdin in batch mode.
pub fn load_reader(mut reader: impl Read, source: &str) -> Result<LoadedDocument, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(source.to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: source.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_path_unsupported_extension() {
        let result = load_path("notes.docx");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_path_no_extension() {
        assert!(matches!(
            load_path("README"),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_path_missing_text_file() {
        let result = load_path("/nonexistent/path/notes.TXT");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_reader() {
        let doc = load_reader("hello world".as_bytes(), "stdin").unwrap();
        assert_eq!(doc.text, "hello world");
        assert_eq!(doc.source, "stdin");
    }

    #[test]
    fn test_load_reader_rejects_blank_input() {
        let result = load_reader("  \n\t".as_bytes(), "stdin");
        assert!(matches!(result, Err(LoadError::EmptyFile(_))));
    }
}
