use crate::engine::{fragments, AnnotationConfig, Fragment, TextAnnotator};
use crate::input::LoadedDocument;

/// A loaded document with its current annotation and scroll position.
pub struct ReadingState {
    pub document: LoadedDocument,
    pub fragments: Vec<Fragment>,
    pub scroll: usize,
}

impl ReadingState {
    pub fn new(document: LoadedDocument, annotator: &TextAnnotator, config: &AnnotationConfig) -> Self {
        let mut state = Self {
            document,
            fragments: Vec::new(),
            scroll: 0,
        };
        state.reannotate(annotator, config);
        state
    }

    /// Recomputes fragments for the whole document.
    pub fn reannotate(&mut self, annotator: &TextAnnotator, config: &AnnotationConfig) {
        let spans = annotator.annotate(&self.document.text, config);
        self.fragments = fragments(&spans);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    /// Keeps the top line within the laid-out document.
    pub fn clamp_scroll(&mut self, total_lines: usize, viewport_height: usize) {
        let max_scroll = total_lines.saturating_sub(viewport_height.max(1));
        self.scroll = self.scroll.min(max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Segmenter, SegmentError};

    struct CharSegmenter;

    impl Segmenter for CharSegmenter {
        fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError> {
            Ok(text.chars().map(String::from).collect())
        }
    }

    fn state(text: &str) -> ReadingState {
        let document = LoadedDocument {
            text: text.to_string(),
            source: "test".to_string(),
        };
        ReadingState::new(
            document,
            &TextAnnotator::new(CharSegmenter),
            &AnnotationConfig::default(),
        )
    }

    #[test]
    fn test_readingstate_initialization() {
        let state = state("hello world");
        assert_eq!(state.scroll, 0);
        assert_eq!(state.fragments[0].text, "hell");
        assert!(state.fragments[0].focus);
    }

    #[test]
    fn test_reannotate_follows_config() {
        let mut state = state("the cat");
        let annotator = TextAnnotator::new(CharSegmenter);
        let config = AnnotationConfig::new(0.5, true).unwrap();
        state.reannotate(&annotator, &config);
        assert_eq!(state.fragments.len(), 1);
        assert!(!state.fragments[0].focus);
    }

    #[test]
    fn test_scroll_by_saturates_at_top() {
        let mut state = state("hello");
        state.scroll_by(-5);
        assert_eq!(state.scroll, 0);
        state.scroll_by(3);
        assert_eq!(state.scroll, 3);
    }

    #[test]
    fn test_clamp_scroll() {
        let mut state = state("hello");
        state.scroll = 50;
        state.clamp_scroll(30, 10);
        assert_eq!(state.scroll, 20);
        state.clamp_scroll(5, 10);
        assert_eq!(state.scroll, 0);
    }
}
