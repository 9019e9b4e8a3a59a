use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Load a UTF-8 text file.
///
/// Whitespace-only files are rejected so the reader never opens on a blank page.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let file_path = Path::new(path);

    if !file_path.exists() {
        return Err(LoadError::FileNotFound(file_path.to_path_buf()));
    }

    let text = std::fs::read_to_string(file_path)?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: format!("txt:{}", file_path.display()),
    })
}
