/// Application events produced by the command deck
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    SetRatio(f64),
    SetIgnoreShort(bool),
    Copy,
    Export(String),
    Clear,
    Quit,
    Help,
    InvalidCommand(String),
    None,
}

/// Terminal-independent key presses
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Char(char),
    Up,
    Down,
    PageUp,
    PageDown,
    Enter,
    Esc,
    Backspace,
}
