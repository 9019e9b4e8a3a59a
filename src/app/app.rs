use super::event::{AppEvent, Key};
use super::mode::AppMode;
use super::render_state::RenderState;
use super::state::ReadingState;
use crate::engine::{AnnotationConfig, ReaderConfig, TextAnnotator};
use crate::export::{self, Format};
use crate::input::{self, LoadError, LoadedDocument};
use crate::ui::command::{command_to_app_event, parse_command};

pub const HELP_TEXT: &str =
    "j/k scroll  +/- ratio  s short words  [/] width  L spacing  c copy  :w file  @file  @@ clipboard  q quit";

fn short_words_status(ignore_short: bool) -> &'static str {
    if ignore_short {
        "Short words left unmarked"
    } else {
        "All words marked"
    }
}

pub struct App {
    mode: AppMode,
    pub annotation: AnnotationConfig,
    pub reader: ReaderConfig,
    annotator: TextAnnotator,
    reading_state: Option<ReadingState>,
    command_input: String,
    status: Option<String>,
    viewport_height: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_config(AnnotationConfig::default(), ReaderConfig::default())
    }

    pub fn with_config(annotation: AnnotationConfig, reader: ReaderConfig) -> Self {
        Self::with_annotator(TextAnnotator::default(), annotation, reader)
    }

    pub fn with_annotator(
        annotator: TextAnnotator,
        annotation: AnnotationConfig,
        reader: ReaderConfig,
    ) -> Self {
        Self {
            mode: AppMode::Reading,
            annotation,
            reader,
            annotator,
            reading_state: None,
            command_input: String::new(),
            status: Some(HELP_TEXT.to_string()),
            viewport_height: 1,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn reading_state(&self) -> Option<&ReadingState> {
        self.reading_state.as_ref()
    }

    pub fn load_document(&mut self, document: LoadedDocument) {
        self.status = Some(format!("Loaded {}", document.source));
        self.reading_state = Some(ReadingState::new(
            document,
            &self.annotator,
            &self.annotation,
        ));
    }

    fn load_result(&mut self, result: Result<LoadedDocument, LoadError>) {
        match result {
            Ok(document) => self.load_document(document),
            Err(err) => {
                log::warn!("load failed: {}", err);
                self.status = Some(format!("Error: {}", err));
            }
        }
    }

    fn reannotate(&mut self) {
        log::debug!(
            "annotation config now ratio {} ignore_short {}",
            self.annotation.ratio,
            self.annotation.ignore_short
        );
        if let Some(state) = self.reading_state.as_mut() {
            state.reannotate(&self.annotator, &self.annotation);
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => {
                let result = input::load_path(&path);
                self.load_result(result);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.load_result(result);
            }
            AppEvent::SetRatio(ratio) => {
                match AnnotationConfig::new(ratio, self.annotation.ignore_short) {
                    Ok(config) => {
                        self.annotation.ratio = config.ratio;
                        self.reannotate();
                        self.status = Some(format!("Ratio {:.1}", ratio));
                    }
                    Err(err) => self.status = Some(format!("Error: {}", err)),
                }
            }
            AppEvent::SetIgnoreShort(ignore_short) => {
                self.annotation.ignore_short = ignore_short;
                self.reannotate();
                self.status = Some(short_words_status(ignore_short).to_string());
            }
            AppEvent::Copy => self.copy(),
            AppEvent::Export(path) => self.export(&path),
            AppEvent::Clear => {
                self.reading_state = None;
                self.status = Some(HELP_TEXT.to_string());
            }
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.status = Some(HELP_TEXT.to_string()),
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    fn copy(&mut self) {
        let Some(state) = self.reading_state.as_ref() else {
            self.status = Some("Nothing to copy".to_string());
            return;
        };
        let spans = self.annotator.annotate(&state.document.text, &self.annotation);
        self.status = Some(match export::copy_rich_text(&spans) {
            Ok(outcome) => outcome.message().to_string(),
            Err(err) => {
                log::warn!("copy failed: {}", err);
                format!("Error: {}", err)
            }
        });
    }

    fn export(&mut self, path: &str) {
        let Some(state) = self.reading_state.as_ref() else {
            self.status = Some("Nothing to export".to_string());
            return;
        };
        let Some(format) = Format::from_path(path) else {
            self.status = Some(format!(
                "Error: unsupported export format: {} (use .html, .md or .ans)",
                path
            ));
            return;
        };
        let spans = self.annotator.annotate(&state.document.text, &self.annotation);
        self.status = Some(match export::write_to_path(path, format, &spans) {
            Ok(bytes) => format!("Wrote {} bytes to {}", bytes, path),
            Err(err) => format!("Error: {}", err),
        });
    }

    pub fn handle_key(&mut self, key: Key) {
        match self.mode {
            AppMode::Reading => self.handle_reading_key(key),
            AppMode::Command => self.handle_command_key(key),
            AppMode::Quit => {}
        }
    }

    fn handle_reading_key(&mut self, key: Key) {
        let page = self.viewport_height.max(1) as isize;
        match key {
            Key::Char('q') => self.mode = AppMode::Quit,
            Key::Char('j') | Key::Down => self.scroll_by(1),
            Key::Char('k') | Key::Up => self.scroll_by(-1),
            Key::Char(' ') | Key::PageDown => self.scroll_by(page),
            Key::PageUp => self.scroll_by(-page),
            Key::Char('+') | Key::Char('=') => {
                self.annotation.adjust_ratio(1);
                self.reannotate();
            }
            Key::Char('-') => {
                self.annotation.adjust_ratio(-1);
                self.reannotate();
            }
            Key::Char('s') => {
                self.annotation.toggle_ignore_short();
                self.reannotate();
                self.status = Some(short_words_status(self.annotation.ignore_short).to_string());
            }
            Key::Char('[') => self.reader.adjust_width(-1),
            Key::Char(']') => self.reader.adjust_width(1),
            Key::Char('L') => self.reader.cycle_line_spacing(),
            Key::Char('c') => self.copy(),
            Key::Char('?') => self.handle_event(AppEvent::Help),
            Key::Char(c @ (':' | '@')) => {
                self.command_input.clear();
                self.command_input.push(c);
                self.mode = AppMode::Command;
            }
            Key::Esc => self.status = None,
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: Key) {
        match key {
            Key::Char(c) => self.command_input.push(c),
            Key::Backspace => {
                self.command_input.pop();
                if self.command_input.is_empty() {
                    self.mode = AppMode::Reading;
                }
            }
            Key::Esc => {
                self.command_input.clear();
                self.mode = AppMode::Reading;
            }
            Key::Enter => {
                let input = std::mem::take(&mut self.command_input);
                self.mode = AppMode::Reading;
                self.handle_event(command_to_app_event(parse_command(&input)));
            }
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        if let Some(state) = self.reading_state.as_mut() {
            state.scroll_by(delta);
        }
    }

    /// Called by the UI after layout so scrolling stays inside the document.
    pub fn set_viewport(&mut self, total_lines: usize, height: usize) {
        self.viewport_height = height;
        if let Some(state) = self.reading_state.as_mut() {
            state.clamp_scroll(total_lines, height);
        }
    }

    pub fn get_render_state(&self) -> RenderState<'_> {
        let state = self.reading_state.as_ref();
        RenderState {
            mode: self.mode,
            fragments: state.map(|s| s.fragments.as_slice()).unwrap_or(&[]),
            scroll: state.map_or(0, |s| s.scroll),
            source: state.map(|s| s.document.source.as_str()),
            status: self.status.as_deref(),
            command_input: &self.command_input,
            annotation: self.annotation,
            reader: self.reader,
        }
    }
}
