use super::boundary::best_cut;
use super::chinese;
use super::config::{AnnotationConfig, LATIN_SHORT_THRESHOLD};
use super::script::{classify, ScriptClass};
use super::segmenter::{JiebaSegmenter, Segmenter};
use super::span::AnnotatedSpan;
use log::debug;

/// Drives classification and per-run annotation over a whole document.
///
/// Holds no per-call state, so one instance can be shared across threads.
pub struct TextAnnotator {
    segmenter: Box<dyn Segmenter>,
}

impl Default for TextAnnotator {
    fn default() -> Self {
        Self::new(JiebaSegmenter::new())
    }
}

impl TextAnnotator {
    pub fn new(segmenter: impl Segmenter + 'static) -> Self {
        Self {
            segmenter: Box::new(segmenter),
        }
    }

    /// Annotates `text` left to right. Concatenating the spans yields `text`.
    pub fn annotate<'a>(&self, text: &'a str, config: &AnnotationConfig) -> Vec<AnnotatedSpan<'a>> {
        let spans = if config.latin_only {
            annotate_latin_only(text, config)
        } else {
            self.annotate_mixed(text, config)
        };

        debug!(
            "annotated {} bytes into {} spans (ratio {}, ignore_short {}, latin_only {})",
            text.len(),
            spans.len(),
            config.ratio,
            config.ignore_short,
            config.latin_only
        );
        spans
    }

    fn annotate_mixed<'a>(&self, text: &'a str, config: &AnnotationConfig) -> Vec<AnnotatedSpan<'a>> {
        let mut spans = Vec::new();

        for token in classify(text) {
            match token.class {
                ScriptClass::Cjk => spans.extend(chinese::annotate_run(
                    self.segmenter.as_ref(),
                    token.text,
                    config.ratio,
                    config.ignore_short,
                )),
                ScriptClass::LatinDigit => {
                    spans.push(annotate_latin(token.text, config.ratio, config.ignore_short))
                }
                ScriptClass::Other => spans.push(AnnotatedSpan::plain(token.text)),
            }
        }
        spans
    }
}

/// Annotates one Latin/digit token; short tokens are exempt before scoring.
pub fn annotate_latin(word: &str, ratio: f64, ignore_short: bool) -> AnnotatedSpan<'_> {
    if word.is_empty() || (ignore_short && word.chars().count() <= LATIN_SHORT_THRESHOLD) {
        return AnnotatedSpan::plain(word);
    }
    AnnotatedSpan::split_at_char(word, best_cut(word, ratio))
}

/// Annotates only the Latin/digit runs, leaving everything else untouched.
pub fn annotate_latin_only<'a>(text: &'a str, config: &AnnotationConfig) -> Vec<AnnotatedSpan<'a>> {
    classify(text)
        .into_iter()
        .map(|token| match token.class {
            ScriptClass::LatinDigit => annotate_latin(token.text, config.ratio, config.ignore_short),
            _ => AnnotatedSpan::plain(token.text),
        })
        .collect()
}
