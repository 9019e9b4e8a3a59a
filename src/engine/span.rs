/// One annotated piece of the source text.
///
/// `focus + faded` is always the source slice. Unmarked spans (punctuation,
/// whitespace, exempted short words, degraded runs) carry their whole text in
/// `focus` with `marked == false` and render without emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedSpan<'a> {
    pub focus: &'a str,
    pub faded: &'a str,
    pub marked: bool,
}

impl<'a> AnnotatedSpan<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            focus: text,
            faded: "",
            marked: false,
        }
    }

    /// Marks the first `cut` characters of `text` as focus.
    pub fn split_at_char(text: &'a str, cut: usize) -> Self {
        let byte = text
            .char_indices()
            .nth(cut)
            .map_or(text.len(), |(idx, _)| idx);
        let (focus, faded) = text.split_at(byte);
        Self {
            focus,
            faded,
            marked: true,
        }
    }

    pub fn text(&self) -> String {
        [self.focus, self.faded].concat()
    }

    pub fn len(&self) -> usize {
        self.focus.len() + self.faded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(is_focus, text)` pieces in order, skipping empty ones.
    pub fn pieces(&self) -> impl Iterator<Item = (bool, &'a str)> {
        let marked = self.marked;
        [(marked, self.focus), (false, self.faded)]
            .into_iter()
            .filter(|(_, text)| !text.is_empty())
    }
}

/// Owned `(is_focus, text)` pair handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub focus: bool,
}

/// Flattens spans into fragments, merging neighbours with the same emphasis.
pub fn fragments(spans: &[AnnotatedSpan<'_>]) -> Vec<Fragment> {
    let mut out: Vec<Fragment> = Vec::new();
    for (focus, text) in spans.iter().flat_map(AnnotatedSpan::pieces) {
        match out.last_mut() {
            Some(last) if last.focus == focus => last.text.push_str(text),
            _ => out.push(Fragment {
                text: text.to_string(),
                focus,
            }),
        }
    }
    out
}

/// Concatenates every span back into the source text.
pub fn reconstruct(spans: &[AnnotatedSpan<'_>]) -> String {
    let mut out = String::with_capacity(spans.iter().map(AnnotatedSpan::len).sum());
    for span in spans {
        out.push_str(span.focus);
        out.push_str(span.faded);
    }
    out
}
