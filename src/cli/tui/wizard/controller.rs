//! Wizard state machine
//!
//! [`WizardController::handle_event`] is the only writer of [`WizardState`].
//! It never touches the terminal or spawns anything itself; side effects are
//! returned as [`Command`]s for the event loop to carry out.

use std::time::Duration;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};
use tui_input::InputRequest;

use crate::config::{CompletionGate, WizardConfig};
use crate::generator::{ProjectRequest, ProjectType};

use super::events::AppEvent;
use super::progress::ProgressTracker;
use super::state::{ActiveList, Step, WizardState};

/// Side effects requested by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the background scaffolding task
    StartGeneration(ProjectRequest),
    /// Deliver an [`AppEvent::Tick`] after the delay
    ScheduleTick(Duration),
    /// Stop the event loop
    Quit,
}

/// What a key press means to the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Interrupt,
    Enter,
    Backspace,
    Delete,
    Up,
    Down,
    Char(char),
    Ignored,
}

impl KeyAction {
    pub fn from_key(key: &KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return KeyAction::Ignored;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::Interrupt
            }
            KeyCode::Esc => KeyAction::Interrupt,
            KeyCode::Enter => KeyAction::Enter,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Up => KeyAction::Up,
            KeyCode::Down => KeyAction::Down,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                KeyAction::Char(c)
            }
            _ => KeyAction::Ignored,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WizardController {
    tick_interval: Duration,
    progress_quantum: f64,
    gate: CompletionGate,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(&WizardConfig::default())
    }
}

impl WizardController {
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            tick_interval: config.tick_interval,
            progress_quantum: config.progress_quantum,
            gate: config.completion_gate,
        }
    }

    /// Fresh state at the name prompt
    pub fn initial_state(&self) -> WizardState {
        WizardState::new(ProgressTracker::new(self.progress_quantum))
    }

    /// Apply one event to the state and return the commands it triggers
    pub fn handle_event(&self, state: &mut WizardState, event: AppEvent) -> Vec<Command> {
        match event {
            AppEvent::Key(key) => {
                let action = KeyAction::from_key(&key);
                if action == KeyAction::Interrupt {
                    info!(step = state.step.name(), "Wizard interrupted");
                    state.interrupted = true;
                    return vec![Command::Quit];
                }

                match state.step {
                    Step::NameInput => self.handle_name_input(state, action),
                    Step::TypeSelect | Step::FrameworkSelect | Step::DatabaseSelect => {
                        self.handle_selection(state, action)
                    }
                    Step::Launching | Step::Executing | Step::Done => Vec::new(),
                }
            }
            AppEvent::Tick => {
                if state.step == Step::Executing {
                    self.handle_tick(state)
                } else {
                    Vec::new()
                }
            }
            AppEvent::GenerationFinished(result) => self.handle_generation_finished(state, result),
            AppEvent::Resize(..) => Vec::new(),
        }
    }

    fn enter(&self, state: &mut WizardState, step: Step) {
        debug!(from = state.step.name(), to = step.name(), "Step transition");
        state.step = step;
        state.history.push(step);
    }

    fn handle_name_input(&self, state: &mut WizardState, action: KeyAction) -> Vec<Command> {
        match action {
            KeyAction::Char(c) => {
                state.input.handle(InputRequest::InsertChar(c));
            }
            // The cursor always sits at the end, so both keys drop the last character
            KeyAction::Backspace | KeyAction::Delete => {
                state.input.handle(InputRequest::DeletePrevChar);
            }
            KeyAction::Enter => {
                state.project_name = state.input.value().trim().to_string();
                state.input.reset();
                state.active_list = Some(ActiveList::project_types());
                self.enter(state, Step::TypeSelect);
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_selection(&self, state: &mut WizardState, action: KeyAction) -> Vec<Command> {
        match action {
            KeyAction::Up | KeyAction::Char('k') => {
                if let Some(list) = state.active_list.as_mut() {
                    list.move_up();
                }
                Vec::new()
            }
            KeyAction::Down | KeyAction::Char('j') => {
                if let Some(list) = state.active_list.as_mut() {
                    list.move_down();
                }
                Vec::new()
            }
            KeyAction::Enter => self.resolve_selection(state),
            _ => Vec::new(),
        }
    }

    fn resolve_selection(&self, state: &mut WizardState) -> Vec<Command> {
        match state.active_list.take() {
            Some(ActiveList::ProjectType(list)) => match list.selected() {
                ProjectType::Cli => {
                    state.project_type = Some(ProjectType::Cli);
                    state.framework = None;
                    state.database = None;
                    self.launch(state)
                }
                ProjectType::Api => {
                    state.project_type = Some(ProjectType::Api);
                    state.active_list = Some(ActiveList::frameworks());
                    self.enter(state, Step::FrameworkSelect);
                    Vec::new()
                }
            },
            Some(ActiveList::Framework(list)) => {
                state.framework = Some(list.selected());
                state.active_list = Some(ActiveList::databases());
                self.enter(state, Step::DatabaseSelect);
                Vec::new()
            }
            Some(ActiveList::Database(list)) => {
                state.database = Some(list.selected());
                self.launch(state)
            }
            None => {
                warn!(step = state.step.name(), "Selection step without a list; rebuilding it");
                self.restart_selection(state);
                Vec::new()
            }
        }
    }

    /// Stay in the current selection step with a fresh list
    fn restart_selection(&self, state: &mut WizardState) {
        state.active_list = Some(match state.step {
            Step::FrameworkSelect => ActiveList::frameworks(),
            Step::DatabaseSelect => ActiveList::databases(),
            _ => ActiveList::project_types(),
        });
    }

    /// Launching is passed through in one go: arm the bar, start the task,
    /// then wait in Executing.
    fn launch(&self, state: &mut WizardState) -> Vec<Command> {
        let Some(request) = state.project_request() else {
            warn!("Launch requested before a project type was chosen");
            state.active_list = Some(ActiveList::project_types());
            self.enter(state, Step::TypeSelect);
            return Vec::new();
        };

        state.active_list = None;
        self.enter(state, Step::Launching);
        state.progress.arm();

        info!(
            project = %request.name,
            kind = request.project_type.as_str(),
            framework = request.framework.map(|f| f.as_str()),
            database = request.database.map(|d| d.as_str()),
            "Launching project generation"
        );

        self.enter(state, Step::Executing);
        vec![
            Command::StartGeneration(request),
            Command::ScheduleTick(self.tick_interval),
        ]
    }

    fn handle_tick(&self, state: &mut WizardState) -> Vec<Command> {
        if !state.progress.is_complete() {
            let ratio = state.progress.tick();
            debug!(ratio, "Progress tick");
        }

        if self.ready_to_finish(state) {
            return self.finish(state);
        }

        if state.progress.is_complete() {
            debug!("Progress full, waiting for the generation task");
            Vec::new()
        } else {
            vec![Command::ScheduleTick(self.tick_interval)]
        }
    }

    fn handle_generation_finished(
        &self,
        state: &mut WizardState,
        result: Result<(), String>,
    ) -> Vec<Command> {
        if state.task_done {
            warn!("Ignoring a second generation result");
            return Vec::new();
        }

        state.task_done = true;
        match result {
            Ok(()) => info!(project = %state.project_name, "Project generation finished"),
            Err(error) => {
                warn!(project = %state.project_name, %error, "Project generation failed");
                state.generation_error = Some(error);
            }
        }

        if state.step == Step::Executing && self.ready_to_finish(state) {
            return self.finish(state);
        }
        Vec::new()
    }

    fn ready_to_finish(&self, state: &WizardState) -> bool {
        match self.gate {
            CompletionGate::ProgressOnly => state.progress.is_complete(),
            CompletionGate::ProgressAndTask => state.progress.is_complete() && state.task_done,
        }
    }

    fn finish(&self, state: &mut WizardState) -> Vec<Command> {
        self.enter(state, Step::Done);
        vec![Command::Quit]
    }
}
