use crate::app::{AppMode, RenderState};
use crate::engine::script::is_cjk;
use crate::engine::Fragment;
use crate::ui::theme::MIDNIGHT;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthChar;

/// One visual row: `(is_focus, text)` runs in order.
pub type Row = Vec<(bool, String)>;

/// Word-aware wrapping of fragments to `width` terminal cells.
///
/// Break opportunities are whitespace and every CJK character. Words wider
/// than a row are hard-broken. Newlines always end a row.
pub fn wrap_fragments(fragments: &[Fragment], width: usize) -> Vec<Row> {
    let mut wrapper = Wrapper::new(width.max(1));

    for fragment in fragments {
        for c in fragment.text.chars() {
            match c {
                '\n' => {
                    wrapper.flush_word();
                    wrapper.end_row();
                }
                '\r' => {}
                '\t' => {
                    wrapper.word.push((' ', fragment.focus));
                    wrapper.flush_word();
                }
                c if c.is_whitespace() => {
                    wrapper.word.push((c, fragment.focus));
                    wrapper.flush_word();
                }
                c if is_cjk(c) => {
                    wrapper.flush_word();
                    wrapper.word.push((c, fragment.focus));
                    wrapper.flush_word();
                }
                c => wrapper.word.push((c, fragment.focus)),
            }
        }
    }

    wrapper.finish()
}

struct Wrapper {
    width: usize,
    rows: Vec<Row>,
    row: Row,
    row_width: usize,
    word: Vec<(char, bool)>,
}

impl Wrapper {
    fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
            row: Vec::new(),
            row_width: 0,
            word: Vec::new(),
        }
    }

    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.word);

        // Trailing whitespace may hang past the edge.
        let visible: usize = word
            .iter()
            .filter(|(c, _)| !c.is_whitespace())
            .map(|(c, _)| char_width(*c))
            .sum();

        if self.row_width > 0 && self.row_width + visible > self.width {
            self.end_row();
        }

        for (c, focus) in word {
            let w = char_width(c);
            if self.row_width > 0 && self.row_width + w > self.width && !c.is_whitespace() {
                self.end_row();
            }
            self.push_char(c, focus, w);
        }
    }

    fn push_char(&mut self, c: char, focus: bool, w: usize) {
        match self.row.last_mut() {
            Some((last_focus, text)) if *last_focus == focus => text.push(c),
            _ => self.row.push((focus, c.to_string())),
        }
        self.row_width += w;
    }

    fn end_row(&mut self) {
        self.rows.push(std::mem::take(&mut self.row));
        self.row_width = 0;
    }

    fn finish(mut self) -> Vec<Row> {
        self.flush_word();
        if !self.row.is_empty() {
            self.end_row();
        }
        self.rows
    }
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Styled lines with `spacing` blank rows after each visual row.
pub fn build_lines(fragments: &[Fragment], width: usize, spacing: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for row in wrap_fragments(fragments, width) {
        let spans: Vec<Span<'static>> = row
            .into_iter()
            .map(|(focus, text)| Span::styled(text, MIDNIGHT.fragment_style(focus)))
            .collect();
        lines.push(Line::from(spans));
        for _ in 0..spacing {
            lines.push(Line::default());
        }
    }
    lines
}

/// The `height` rows starting at `scroll`. Offsets are not limited to `u16`.
pub fn render_document(lines: Vec<Line<'static>>, scroll: usize, height: usize) -> Paragraph<'static> {
    let visible: Vec<Line<'static>> = lines.into_iter().skip(scroll).take(height).collect();
    Paragraph::new(visible).style(MIDNIGHT.page_style())
}

pub fn render_progress(scroll: usize, total_lines: usize, height: usize) -> String {
    if total_lines == 0 {
        return "0%".to_string();
    }
    let seen = (scroll + height).min(total_lines);
    format!("{}%", seen * 100 / total_lines)
}

pub fn render_status_bar(state: &RenderState<'_>, total_lines: usize, height: usize) -> Line<'static> {
    let mode_indicator = match state.mode {
        AppMode::Reading => " READING ",
        AppMode::Command => " COMMAND ",
        AppMode::Quit => " QUIT ",
    };

    let message = match state.mode {
        AppMode::Command => format!(" {}▏", state.command_input),
        _ => format!(" {}", state.status.unwrap_or("")),
    };

    let settings = format!(
        " ratio {:.1} │ {} │ {} │ {} ",
        state.annotation.ratio,
        if state.annotation.ignore_short { "skip short" } else { "all words" },
        state.source.unwrap_or("no document"),
        render_progress(state.scroll, total_lines, height),
    );

    Line::from(vec![
        Span::styled(mode_indicator, MIDNIGHT.mode_badge_style()),
        Span::styled(message, MIDNIGHT.message_style()),
        Span::styled(settings, MIDNIGHT.settings_style()),
    ])
}

pub fn render_placeholder() -> Paragraph<'static> {
    let text = "Type @filename to load a .txt, .pdf or .epub file\nOr @@ to load from clipboard\n:q to quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(MIDNIGHT.hint_style())
}
