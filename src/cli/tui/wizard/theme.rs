use ratatui::style::{Color, Modifier, Style};

/// Styles handed to the renderer; nothing reads styling from globals
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub item: Style,
    pub selected: Style,
    pub prompt: Style,
    pub progress_filled: Style,
    pub progress_empty: Style,
    pub success: Style,
    pub error: Style,
    pub muted: Style,
    pub highlight: Style,
    /// Prefix drawn before the highlighted option
    pub cursor_marker: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(4, 148, 136))
                .add_modifier(Modifier::BOLD),
            item: Style::default()
                .fg(Color::Rgb(4, 148, 136)),
            selected: Style::default()
                .fg(Color::Indexed(170))
                .add_modifier(Modifier::BOLD),
            prompt: Style::default()
                .fg(Color::Rgb(4, 148, 136)),
            progress_filled: Style::default()
                .fg(Color::Magenta),
            progress_empty: Style::default()
                .fg(Color::DarkGray),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            cursor_marker: ">> ",
        }
    }
}

impl Theme {
    /// Unstyled theme, handy for snapshotting rendered text
    pub fn plain() -> Self {
        Self {
            title: Style::default(),
            item: Style::default(),
            selected: Style::default(),
            prompt: Style::default(),
            progress_filled: Style::default(),
            progress_empty: Style::default(),
            success: Style::default(),
            error: Style::default(),
            muted: Style::default(),
            highlight: Style::default(),
            cursor_marker: ">> ",
        }
    }
}
