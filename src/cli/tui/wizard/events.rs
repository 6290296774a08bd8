use ratatui::crossterm::event::KeyEvent;

/// Everything the event loop can receive, serialized through one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Timer driving the progress bar while executing
    Tick,

    // Outcome of the background scaffolding task, sent exactly once
    GenerationFinished(Result<(), String>),
}
