use crate::engine::AnnotatedSpan;

/// `<strong>focus</strong>faded`, with every piece text-escaped.
pub fn to_html(spans: &[AnnotatedSpan<'_>]) -> String {
    let mut out = String::new();
    for span in spans {
        for (focus, text) in span.pieces() {
            if focus {
                out.push_str("<strong>");
                html_escape::encode_text_to_string(text, &mut out);
                out.push_str("</strong>");
            } else {
                html_escape::encode_text_to_string(text, &mut out);
            }
        }
    }
    out
}

/// Wraps an HTML fragment so pasted line breaks survive.
pub fn wrap_preformatted(fragment: &str) -> String {
    format!("<div style=\"white-space: pre-wrap\">{}</div>", fragment)
}
