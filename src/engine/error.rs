use thiserror::Error;

/// Failure of a word segmenter on one CJK run.
///
/// The Chinese annotator recovers from this locally; it never reaches callers
/// of the text annotator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    #[error("segmenter backend failed: {0}")]
    Backend(String),

    #[error("segmented words do not rebuild the input: expected {expected:?}, got {actual:?}")]
    ContractViolation { expected: String, actual: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("ratio {0} is outside 0.2..=0.8")]
    RatioOutOfRange(f64),

    #[error("line spacing {0} is outside 0..=2")]
    LineSpacingOutOfRange(u16),

    #[error("text width {0} is outside 40..=160")]
    WidthOutOfRange(u16),
}
