//! State to text
//!
//! Everything here is a pure function of [`WizardState`] and a [`Theme`]; the
//! app decides where the text goes.

use ratatui::text::{Line, Span, Text};

use super::progress::ProgressTracker;
use super::state::{Step, WizardState};
use super::theme::Theme;

const BANNER: [&str; 6] = [
    r"    __          _ __                __      __                  ___ ",
    r"   / /_  ____  (_) /__  _________  / /___ _/ /____        _____/ (_)",
    r"  / __ \/ __ \/ / / _ \/ ___/ __ \/ / __ `/ __/ _ \______/ ___/ / / ",
    r" / /_/ / /_/ / / /  __/ /  / /_/ / / /_/ / /_/  __/_____/ /__/ / /  ",
    r"/_.___/\____/_/_/\___/_/  / .___/_/\__,_/\__/\___/      \___/_/_/   ",
    r"                         /_/                                        ",
];

/// Width of the text progress bar in cells
pub const PROGRESS_WIDTH: usize = 40;

pub fn render(state: &WizardState, theme: &Theme) -> Text<'static> {
    let lines = match state.step {
        Step::NameInput => render_name_input(state, theme),
        Step::TypeSelect | Step::FrameworkSelect | Step::DatabaseSelect => {
            render_selection(state, theme)
        }
        Step::Launching => vec![
            Line::from(Span::styled("Creating project...", theme.highlight)),
            Line::from(""),
            progress_bar(&state.progress, theme),
        ],
        Step::Executing => render_executing(state, theme),
        Step::Done => render_done(state, theme),
    };
    Text::from(lines)
}

/// Key hints for the help bar
pub fn help_text(step: Step) -> &'static str {
    match step {
        Step::NameInput => "Type a name · Enter to continue · Esc/Ctrl+C to quit",
        Step::TypeSelect | Step::FrameworkSelect | Step::DatabaseSelect => {
            "↑/↓ or k/j to move · Enter to select · Esc/Ctrl+C to quit"
        }
        Step::Launching | Step::Executing => "Creating project · Esc/Ctrl+C to quit",
        Step::Done => "Ctrl+C to exit",
    }
}

/// Plain text printed once the terminal is restored
pub fn summary(state: &WizardState) -> String {
    if state.interrupted {
        return "Wizard cancelled.".to_string();
    }

    render(state, &Theme::plain())
        .lines
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_name_input(state: &WizardState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = BANNER
        .iter()
        .map(|row| Line::from(Span::styled(*row, theme.item)))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Choose your project name  ", theme.title)));
    lines.push(Line::from(Span::styled(
        format!("> {}", state.input_buffer()),
        theme.prompt,
    )));
    lines
}

fn render_selection(state: &WizardState, theme: &Theme) -> Vec<Line<'static>> {
    match &state.active_list {
        Some(list) => list.render(theme),
        None => vec![Line::from(Span::styled("Loading options...", theme.muted))],
    }
}

fn render_executing(state: &WizardState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Creating project...", theme.highlight)),
        Line::from(""),
        progress_bar(&state.progress, theme),
    ];

    if state.progress.is_complete() && !state.task_done {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Finishing up...", theme.muted)));
    }
    lines
}

fn render_done(state: &WizardState, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match (&state.generation_error, state.task_done) {
        (Some(error), _) => {
            lines.push(Line::from(Span::styled(
                "✗ Project creation failed",
                theme.error,
            )));
            lines.push(Line::from(format!("  {}", error)));
        }
        (None, true) => {
            lines.push(Line::from(Span::styled(
                "🎉 Project created successfully!",
                theme.success,
            )));
        }
        (None, false) => {
            lines.push(Line::from(Span::styled(
                "Project files are still being written.",
                theme.muted,
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(detail_line("Name", &state.project_name, theme));
    if let Some(project_type) = state.project_type {
        lines.push(detail_line("Type", project_type.as_str(), theme));
    }
    if let Some(framework) = state.framework {
        lines.push(detail_line("Framework", framework.as_str(), theme));
    }
    if let Some(database) = state.database {
        lines.push(detail_line("Database", database.as_str(), theme));
    }
    lines
}

fn detail_line(label: &str, value: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10} ", format!("{}:", label)), theme.muted),
        Span::raw(value.to_string()),
    ])
}

/// `[████░░░░] 50%` style bar
pub fn progress_bar(progress: &ProgressTracker, theme: &Theme) -> Line<'static> {
    let ratio = progress.ratio().clamp(0.0, 1.0);
    let filled = (ratio * PROGRESS_WIDTH as f64).round() as usize;
    let empty = PROGRESS_WIDTH - filled;

    Line::from(vec![
        Span::raw("["),
        Span::styled("█".repeat(filled), theme.progress_filled),
        Span::styled("░".repeat(empty), theme.progress_empty),
        Span::raw("] "),
        Span::raw(format!("{:>3}%", progress.percent())),
    ])
}
