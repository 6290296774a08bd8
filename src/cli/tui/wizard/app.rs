use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::config::WizardConfig;
use crate::generator::ProjectGenerator;
use crate::{BoilerplateError, Result};

use super::controller::{Command, WizardController};
use super::dispatcher::CommandDispatcher;
use super::events::AppEvent;
use super::render;
use super::state::WizardState;
use super::theme::Theme;

/// How long the input reader blocks before checking whether the loop is gone
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Current state of the wizard
    state: WizardState,
    controller: WizardController,
    /// Theme for styling
    theme: Theme,
    dispatcher: CommandDispatcher,
    generator: Arc<dyn ProjectGenerator>,
    event_tx: UnboundedSender<AppEvent>,
    event_rx: UnboundedReceiver<AppEvent>,
    config: WizardConfig,
    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    pub fn new(config: WizardConfig, generator: Arc<dyn ProjectGenerator>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let controller = WizardController::new(&config);

        Self {
            state: controller.initial_state(),
            controller,
            theme: Theme::default(),
            dispatcher: CommandDispatcher::new(event_tx.clone()),
            generator,
            event_tx,
            event_rx,
            config,
            should_quit: false,
        }
    }

    /// Run the wizard until Done or an interrupt and return the final state
    pub async fn run(mut self) -> Result<WizardState> {
        let mut terminal =
            ratatui::try_init().map_err(|e| BoilerplateError::Terminal(e.to_string()))?;

        spawn_input_reader(self.event_tx.clone());

        let result = self.main_loop(&mut terminal).await;

        // Cleanup
        ratatui::restore();
        result?;

        self.shutdown().await;
        Ok(self.state)
    }

    async fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            match self.event_rx.recv().await {
                Some(event) => self.apply(event),
                None => break,
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.muted)
            .title(Span::styled(
                format!(" boilerplate-cli · {} ", self.state.step.name()),
                self.theme.highlight,
            ));
        let content = Paragraph::new(render::render(&self.state, &self.theme)).block(block);
        frame.render_widget(content, chunks[0]);

        let help = Paragraph::new(Line::from(Span::styled(
            render::help_text(self.state.step),
            self.theme.muted,
        )));
        frame.render_widget(help, chunks[1]);
    }

    /// Feed one event through the controller and carry out what it asks for
    fn apply(&mut self, event: AppEvent) {
        let commands = self.controller.handle_event(&mut self.state, event);
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        debug!(?command, "Executing command");
        match command {
            Command::StartGeneration(request) => {
                let generator = Arc::clone(&self.generator);
                if let Err(e) = self.dispatcher.dispatch(move || generator.create(&request)) {
                    warn!(error = %e, "Generation not started");
                }
            }
            Command::ScheduleTick(delay) => {
                let tx = self.event_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(AppEvent::Tick);
                });
            }
            Command::Quit => self.should_quit = true,
        }
    }

    /// Settle the generation task, then pick up a result that arrived after Done.
    /// After an interrupt the task is detached and its result dropped.
    async fn shutdown(&mut self) {
        if self.state.interrupted {
            info!("Interrupted; leaving any running generation task behind");
            self.dispatcher.detach();
            return;
        }

        self.dispatcher.settle(self.config.shutdown_grace).await;
        while let Ok(event) = self.event_rx.try_recv() {
            if matches!(event, AppEvent::GenerationFinished(_)) {
                self.apply(event);
            }
        }
    }
}

/// Forward key presses and resizes until the receiving side goes away
fn spawn_input_reader(tx: UnboundedSender<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!(error = %e, "Terminal input poll failed");
                    break;
                }
            }

            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(width, height)) => tx.send(AppEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(e) => {
                    warn!(error = %e, "Terminal input read failed");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        }
        debug!("Input reader stopped");
    });
}
