pub mod command;
pub mod reader;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{command_to_app_event, parse_command, Command};
pub use reader::view::{build_lines, render_status_bar, wrap_fragments};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
