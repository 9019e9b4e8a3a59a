use crate::engine::AnnotatedSpan;
use crossterm::style::{style, Stylize};
use std::fmt::Write;

/// Focus in bold, faded dimmed; unmarked text is left unstyled.
pub fn to_ansi(spans: &[AnnotatedSpan<'_>]) -> String {
    let mut out = String::new();
    for span in spans {
        if !span.marked {
            out.push_str(span.focus);
            continue;
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", style(span.focus).bold());
        if !span.faded.is_empty() {
            let _ = write!(out, "{}", style(span.faded).dim());
        }
    }
    out
}
