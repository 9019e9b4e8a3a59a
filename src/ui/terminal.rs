use crate::app::{App, AppEvent, AppMode, Key};
use crate::ui::reader::view::{build_lines, render_document, render_placeholder, render_status_bar};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::MIDNIGHT;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Paragraph},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    app.handle_event(AppEvent::Quit);
                    continue;
                }
                if let Some(key) = map_key(key.code) {
                    app.handle_key(key);
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &mut App) -> io::Result<()> {
        let size = self.terminal.size()?;
        let (text_area, _) = split_area(Rect::new(0, 0, size.width, size.height), app.reader.text_width);

        let lines = {
            let state = app.get_render_state();
            build_lines(state.fragments, text_area.width as usize, state.reader.line_spacing)
        };
        let total_lines = lines.len();
        let height = text_area.height as usize;
        app.set_viewport(total_lines, height);

        let state = app.get_render_state();
        self.terminal.draw(|frame| {
            let (text_area, status_area) = split_area(frame.area(), state.reader.text_width);

            frame.render_widget(
                Block::default().style(MIDNIGHT.page_style()),
                frame.area(),
            );

            if state.has_document() {
                frame.render_widget(render_document(lines, state.scroll, height), text_area);
            } else {
                frame.render_widget(render_placeholder(), text_area);
            }

            frame.render_widget(
                Paragraph::new(render_status_bar(&state, total_lines, height)),
                status_area,
            );
        })?;

        Ok(())
    }
}

/// Centred reading column above a one-row status bar.
fn split_area(area: Rect, text_width: u16) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let width = text_width.min(rows[0].width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(rows[0]);

    (columns[1], rows[1])
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}
