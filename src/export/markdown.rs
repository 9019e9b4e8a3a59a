use crate::engine::AnnotatedSpan;

const MARKDOWN_SPECIAL: &[char] = &['\\', '*', '_', '`', '~', '[', ']', '<', '>', '#'];

pub fn to_markdown(spans: &[AnnotatedSpan<'_>]) -> String {
    let mut out = String::new();
    for span in spans {
        for (focus, text) in span.pieces() {
            if focus {
                out.push_str("**");
                push_escaped(&mut out, text);
                out.push_str("**");
            } else {
                push_escaped(&mut out, text);
            }
        }
    }
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
}
