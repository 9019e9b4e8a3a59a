use super::{LoadError, LoadedDocument};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load text from PDF file using pdf-extract crate.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    // Read PDF file into memory
    let mut file = File::open(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.display().to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: format!("pdf:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pdf_load_nonexistent_file() {
        let result = load("/nonexistent/path/document.pdf");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_pdf_load_garbage_is_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"definitely not a pdf").unwrap();

        let result = load(file.path().to_str().unwrap());
        assert!(matches!(result, Err(LoadError::PdfParse(_))));
    }

    #[test]
    fn test_pdf_parse_error() {
        let err = LoadError::PdfParse("Invalid PDF structure".to_string());
        assert!(matches!(err, LoadError::PdfParse(msg) if msg.contains("Invalid")));
    }
}
