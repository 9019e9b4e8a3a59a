#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Scrolling through the annotated document
    Reading,
    /// Typing into the command deck
    Command,
    Quit,
}
