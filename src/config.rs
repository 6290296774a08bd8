//! Runtime configuration for the wizard
//!
//! Nothing here is read from disk or the environment; the binary builds a
//! [`WizardConfig`] from defaults and passes it down explicitly.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::tui::wizard::progress::DEFAULT_QUANTUM;

/// Rule deciding when the Executing step may advance to Done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionGate {
    /// Done once the progress bar is full AND the generation task reported back
    #[default]
    ProgressAndTask,
    /// Done as soon as the progress bar is full, regardless of the task
    ProgressOnly,
}

/// Settings shared by the controller and the event loop
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Delay between progress ticks while executing
    pub tick_interval: Duration,
    /// Ratio added to the progress bar per tick
    pub progress_quantum: f64,
    pub completion_gate: CompletionGate,
    /// Directory the project folder is created in
    pub output_dir: PathBuf,
    /// How long to wait for an in-flight generation task at exit before detaching it
    pub shutdown_grace: Duration,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            progress_quantum: DEFAULT_QUANTUM,
            completion_gate: CompletionGate::default(),
            output_dir: PathBuf::from("."),
            shutdown_grace: Duration::from_secs(5),
        }
    }
}

impl WizardConfig {
    pub fn with_completion_gate(mut self, gate: CompletionGate) -> Self {
        self.completion_gate = gate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_one_second_quarter_ticks() {
        let config = WizardConfig::default();
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.progress_quantum, 0.25);
        assert_eq!(config.completion_gate, CompletionGate::ProgressAndTask);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_builder_overrides() {
        let config = WizardConfig::default().with_completion_gate(CompletionGate::ProgressOnly);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.completion_gate, CompletionGate::ProgressOnly);
    }
}
