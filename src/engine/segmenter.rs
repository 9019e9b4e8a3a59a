use super::error::SegmentError;
use jieba_rs::Jieba;
use lazy_static::lazy_static;

lazy_static! {
    // Loading the bundled dictionary is the expensive part; share one instance.
    static ref JIEBA: Jieba = Jieba::new();
}

/// Word segmentation backend for Chinese runs.
///
/// The returned words must concatenate back to `text` exactly.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError>;
}

/// Segmenter backed by jieba's default dictionary with HMM for unknown words.
#[derive(Debug, Clone, Copy)]
pub struct JiebaSegmenter {
    pub hmm: bool,
}

impl JiebaSegmenter {
    pub fn new() -> Self {
        Self { hmm: true }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let words: Vec<String> = JIEBA
            .cut(text, self.hmm)
            .into_iter()
            .map(str::to_string)
            .collect();
        verify_words(text, &words)?;
        Ok(words)
    }
}

/// Checks that `words` rebuild `text` with nothing dropped or added.
pub fn verify_words(text: &str, words: &[String]) -> Result<(), SegmentError> {
    let rebuilt = words.concat();
    if rebuilt == text && words.iter().all(|w| !w.is_empty()) {
        Ok(())
    } else {
        Err(SegmentError::ContractViolation {
            expected: text.to_string(),
            actual: rebuilt,
        })
    }
}
