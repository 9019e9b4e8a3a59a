use super::{LoadError, LoadedDocument};

/// Load the clipboard's current text.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile("clipboard".to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
    })
}
