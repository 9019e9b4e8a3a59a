use super::boundary::ratio_len;
use super::config::CJK_SHORT_THRESHOLD;
use super::script::contains_cjk;
use super::segmenter::{verify_words, Segmenter};
use super::span::AnnotatedSpan;
use log::warn;

/// Annotates one CJK run, one span per segmented word.
///
/// If the segmenter fails or returns words that do not rebuild the run, the
/// whole run comes back as a single unmarked span.
pub fn annotate_run<'a>(
    segmenter: &dyn Segmenter,
    run: &'a str,
    ratio: f64,
    ignore_short: bool,
) -> Vec<AnnotatedSpan<'a>> {
    if run.is_empty() {
        return Vec::new();
    }

    let words = match segmenter
        .segment(run)
        .and_then(|words| verify_words(run, &words).map(|()| words))
    {
        Ok(words) => words,
        Err(err) => {
            warn!("leaving CJK run unannotated: {}", err);
            return vec![AnnotatedSpan::plain(run)];
        }
    };

    // Re-slice the run by word byte lengths so spans borrow the source.
    let mut spans = Vec::with_capacity(words.len());
    let mut offset = 0;
    for word in &words {
        let slice = &run[offset..offset + word.len()];
        offset += word.len();
        spans.push(annotate_word(slice, ratio, ignore_short));
    }
    spans
}

/// Ratio cut for a single segmented word.
pub fn annotate_word(word: &str, ratio: f64, ignore_short: bool) -> AnnotatedSpan<'_> {
    if !contains_cjk(word) {
        return AnnotatedSpan::plain(word);
    }

    let len = word.chars().count();
    if ignore_short && len <= CJK_SHORT_THRESHOLD {
        return AnnotatedSpan::plain(word);
    }

    AnnotatedSpan::split_at_char(word, ratio_len(len, ratio))
}
