pub mod annotator;
pub mod boundary;
pub mod chinese;
pub mod clusters;
pub mod config;
pub mod error;
pub mod script;
pub mod segmenter;
pub mod span;

pub use annotator::{annotate_latin, annotate_latin_only, TextAnnotator};
pub use boundary::best_cut;
pub use config::{AnnotationConfig, ReaderConfig};
pub use error::{ConfigError, SegmentError};
pub use script::{classify, ScriptClass, Token};
pub use segmenter::{JiebaSegmenter, Segmenter};
pub use span::{fragments, reconstruct, AnnotatedSpan, Fragment};

/// Annotates `text` with the default jieba-backed annotator.
pub fn annotate<'a>(text: &'a str, config: &AnnotationConfig) -> Vec<AnnotatedSpan<'a>> {
    TextAnnotator::default().annotate(text, config)
}
