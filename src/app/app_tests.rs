use crate::app::app::HELP_TEXT;
use crate::app::mode::AppMode;
use crate::app::{App, AppEvent, Key, RenderState};
use crate::engine::{AnnotationConfig, ReaderConfig, SegmentError, Segmenter, TextAnnotator};
use crate::input::LoadedDocument;

struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        Ok(text.chars().map(String::from).collect())
    }
}

fn test_app() -> App {
    App::with_annotator(
        TextAnnotator::new(CharSegmenter),
        AnnotationConfig::default(),
        ReaderConfig::default(),
    )
}

fn loaded_app(text: &str) -> App {
    let mut app = test_app();
    app.load_document(LoadedDocument {
        text: text.to_string(),
        source: "test".to_string(),
    });
    app
}

fn type_command(app: &mut App, command: &str) {
    for c in command.chars() {
        app.handle_key(Key::Char(c));
    }
    app.handle_key(Key::Enter);
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = test_app();
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_app_handle_event_help() {
    let mut app = test_app();
    app.handle_event(AppEvent::InvalidCommand("x".to_string()));
    app.handle_event(AppEvent::Help);
    assert_eq!(app.status(), Some(HELP_TEXT));
}

#[test]
fn test_app_get_render_state_returns_correct_initial_state() {
    let app = test_app();
    let state: RenderState = app.get_render_state();
    assert_eq!(state.mode, AppMode::Reading);
    assert!(state.fragments.is_empty());
    assert!(!state.has_document());
}

#[test]
fn test_load_document_annotates() {
    let app = loaded_app("reading");
    let state = app.get_render_state();
    assert_eq!(state.source, Some("test"));
    assert_eq!(state.fragments[0].text, "read");
    assert!(state.fragments[0].focus);
}

#[test]
fn test_ratio_keys_reannotate() {
    let mut app = loaded_app("reading");
    app.handle_key(Key::Char('+'));
    assert_eq!(app.annotation.ratio, 0.6);
    app.handle_key(Key::Char('-'));
    app.handle_key(Key::Char('-'));
    assert_eq!(app.annotation.ratio, 0.4);
    let text: String = app
        .get_render_state()
        .fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect();
    assert_eq!(text, "reading");
}

#[test]
fn test_toggle_short_key() {
    let mut app = loaded_app("cat");
    assert!(app.get_render_state().fragments[0].focus);
    app.handle_key(Key::Char('s'));
    assert!(app.annotation.ignore_short);
    let state = app.get_render_state();
    assert_eq!(state.fragments.len(), 1);
    assert!(!state.fragments[0].focus);
}

#[test]
fn test_reader_layout_keys() {
    let mut app = test_app();
    app.handle_key(Key::Char(']'));
    assert_eq!(app.reader.text_width, 90);
    app.handle_key(Key::Char('L'));
    assert_eq!(app.reader.line_spacing, 1);
}

#[test]
fn test_command_mode_ratio() {
    let mut app = loaded_app("reading");
    app.handle_key(Key::Char(':'));
    assert_eq!(app.mode(), AppMode::Command);
    type_command(&mut app, "ratio 0.3");
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.annotation.ratio, 0.3);
}

#[test]
fn test_command_mode_rejects_bad_ratio() {
    let mut app = loaded_app("reading");
    app.handle_key(Key::Char(':'));
    type_command(&mut app, "ratio 0.95");
    assert_eq!(app.annotation.ratio, 0.5);
    assert!(app.status().unwrap().starts_with("Error"));
}

#[test]
fn test_command_mode_escape_cancels() {
    let mut app = test_app();
    app.handle_key(Key::Char(':'));
    app.handle_key(Key::Char('q'));
    app.handle_key(Key::Esc);
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.get_render_state().command_input, "");
}

#[test]
fn test_command_mode_backspace_to_empty_leaves() {
    let mut app = test_app();
    app.handle_key(Key::Char('@'));
    app.handle_key(Key::Backspace);
    assert_eq!(app.mode(), AppMode::Reading);
}

#[test]
fn test_command_quit() {
    let mut app = test_app();
    app.handle_key(Key::Char(':'));
    type_command(&mut app, "q");
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_load_missing_file_sets_error_status() {
    let mut app = test_app();
    app.handle_event(AppEvent::LoadFile("/nonexistent/book.txt".to_string()));
    assert!(app.reading_state().is_none());
    assert!(app.status().unwrap().contains("File not found"));
}

#[test]
fn test_export_command_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.md");
    let mut app = loaded_app("cat");
    app.handle_event(AppEvent::Export(path.to_str().unwrap().to_string()));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "**ca**t");
}

#[test]
fn test_export_without_document() {
    let mut app = test_app();
    app.handle_event(AppEvent::Export("unused.html".to_string()));
    assert_eq!(app.status(), Some("Nothing to export"));
}

#[test]
fn test_scroll_clamped_by_viewport() {
    let mut app = loaded_app("one\ntwo\nthree\nfour");
    app.set_viewport(4, 2);
    for _ in 0..10 {
        app.handle_key(Key::Char('j'));
    }
    app.set_viewport(4, 2);
    assert_eq!(app.get_render_state().scroll, 2);
    app.handle_key(Key::PageUp);
    assert_eq!(app.get_render_state().scroll, 0);
}

#[test]
fn test_clear_drops_document() {
    let mut app = loaded_app("hello");
    app.handle_event(AppEvent::Clear);
    assert!(!app.get_render_state().has_document());
}

#[test]
fn test_short_command_reports_status() {
    let mut app = loaded_app("the cat");
    app.handle_key(Key::Char(':'));
    type_command(&mut app, "short on");
    assert!(app.annotation.ignore_short);
    assert_eq!(app.status(), Some("Short words left unmarked"));
    app.handle_event(AppEvent::SetIgnoreShort(false));
    assert_eq!(app.status(), Some("All words marked"));
}

#[test]
fn test_export_unknown_extension_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let mut app = loaded_app("cat");
    app.handle_event(AppEvent::Export(path.to_str().unwrap().to_string()));
    assert!(!path.exists());
    assert!(app
        .status()
        .unwrap()
        .starts_with("Error: unsupported export format"));
}

#[test]
fn test_ratio_command_keeps_latin_only() {
    let mut app = App::with_annotator(
        TextAnnotator::new(CharSegmenter),
        AnnotationConfig::default().with_latin_only(true),
        ReaderConfig::default(),
    );
    app.handle_event(AppEvent::SetRatio(0.7));
    assert_eq!(app.annotation.ratio, 0.7);
    assert!(app.annotation.latin_only);
}

#[test]
fn test_new_app_starts_reading() {
    assert_eq!(test_app().mode(), AppMode::Reading);
}
