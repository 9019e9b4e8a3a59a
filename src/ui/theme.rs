use ratatui::style::{Color, Modifier, Style};

/// Reader palette and the styles derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub page: Color,
    pub ink: Color,
    pub focus: Color,
    pub muted: Color,
    pub bar: Color,
}

pub const MIDNIGHT: Theme = Theme {
    page: Color::Rgb(26, 27, 38),     // #1A1B26
    ink: Color::Rgb(169, 177, 214),   // #A9B1D6
    focus: Color::Rgb(192, 202, 245), // #C0CAF5
    muted: Color::Rgb(100, 110, 150), // #646E96
    bar: Color::Rgb(36, 40, 59),      // #24283B
};

impl Default for Theme {
    fn default() -> Self {
        MIDNIGHT
    }
}

impl Theme {
    pub fn page_style(&self) -> Style {
        Style::default().bg(self.page)
    }

    /// Fixation prefix: bold and brighter than the rest of the word.
    pub fn focus_style(&self) -> Style {
        Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    pub fn faded_style(&self) -> Style {
        Style::default().fg(self.ink)
    }

    pub fn fragment_style(&self, focus: bool) -> Style {
        if focus {
            self.focus_style()
        } else {
            self.faded_style()
        }
    }

    pub fn mode_badge_style(&self) -> Style {
        Style::default()
            .fg(self.page)
            .bg(self.focus)
            .add_modifier(Modifier::BOLD)
    }

    pub fn message_style(&self) -> Style {
        Style::default().fg(self.ink).bg(self.bar)
    }

    pub fn settings_style(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bar)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted).bg(self.page)
    }
}
