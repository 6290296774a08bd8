use ratatui::text::Line;
use tui_input::Input;

use crate::generator::{Database, Framework, ProjectRequest, ProjectType};

use super::list::{Choice, SelectableList};
use super::progress::ProgressTracker;
use super::theme::Theme;

/// Stages of the wizard, in the only order they can be visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    NameInput,
    TypeSelect,
    FrameworkSelect,
    DatabaseSelect,
    Launching,
    Executing,
    Done,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::NameInput => "Project name",
            Step::TypeSelect => "Project type",
            Step::FrameworkSelect => "Framework",
            Step::DatabaseSelect => "Database",
            Step::Launching => "Launching",
            Step::Executing => "Creating project",
            Step::Done => "Done",
        }
    }
}

impl Choice for ProjectType {
    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl Choice for Framework {
    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl Choice for Database {
    fn label(&self) -> &'static str {
        self.as_str()
    }
}

/// The list on screen during a selection step, typed per step
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveList {
    ProjectType(SelectableList<ProjectType>),
    Framework(SelectableList<Framework>),
    Database(SelectableList<Database>),
}

impl ActiveList {
    pub fn project_types() -> Self {
        ActiveList::ProjectType(SelectableList::new(
            "Select the project type",
            ProjectType::Api,
            [ProjectType::Cli],
        ))
    }

    pub fn frameworks() -> Self {
        ActiveList::Framework(SelectableList::new(
            "Select a framework",
            Framework::GinGonic,
            [Framework::Echo, Framework::Fiber, Framework::None],
        ))
    }

    pub fn databases() -> Self {
        ActiveList::Database(SelectableList::new(
            "Select the database",
            Database::PostgreSQL,
            [Database::MySql, Database::MongoDb, Database::None],
        ))
    }

    pub fn move_up(&mut self) {
        match self {
            ActiveList::ProjectType(list) => list.move_up(),
            ActiveList::Framework(list) => list.move_up(),
            ActiveList::Database(list) => list.move_up(),
        }
    }

    pub fn move_down(&mut self) {
        match self {
            ActiveList::ProjectType(list) => list.move_down(),
            ActiveList::Framework(list) => list.move_down(),
            ActiveList::Database(list) => list.move_down(),
        }
    }

    pub fn cursor(&self) -> usize {
        match self {
            ActiveList::ProjectType(list) => list.cursor(),
            ActiveList::Framework(list) => list.cursor(),
            ActiveList::Database(list) => list.cursor(),
        }
    }

    pub fn render(&self, theme: &Theme) -> Vec<Line<'static>> {
        match self {
            ActiveList::ProjectType(list) => list.render(theme),
            ActiveList::Framework(list) => list.render(theme),
            ActiveList::Database(list) => list.render(theme),
        }
    }
}

/// The single mutable record owned by the event loop
#[derive(Debug, Clone)]
pub struct WizardState {
    pub step: Step,
    pub project_name: String,
    pub project_type: Option<ProjectType>,
    pub framework: Option<Framework>,
    pub database: Option<Database>,
    /// Live text while naming the project
    pub input: Input,
    /// Present only during a selection step
    pub active_list: Option<ActiveList>,
    pub progress: ProgressTracker,
    /// Set once the generation task reports back
    pub task_done: bool,
    pub generation_error: Option<String>,
    /// Set when the user interrupted the wizard
    pub interrupted: bool,
    /// Every step entered so far, in order
    pub history: Vec<Step>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(ProgressTracker::default())
    }
}

impl WizardState {
    pub fn new(progress: ProgressTracker) -> Self {
        Self {
            step: Step::NameInput,
            project_name: String::new(),
            project_type: None,
            framework: None,
            database: None,
            input: Input::default(),
            active_list: None,
            progress,
            task_done: false,
            generation_error: None,
            interrupted: false,
            history: vec![Step::NameInput],
        }
    }

    pub fn input_buffer(&self) -> &str {
        self.input.value()
    }

    /// The request handed to the generator at launch, once a type is chosen
    pub fn project_request(&self) -> Option<ProjectRequest> {
        Some(ProjectRequest {
            name: self.project_name.clone(),
            project_type: self.project_type?,
            framework: self.framework,
            database: self.database,
        })
    }

    /// True when the wizard finished and the generator reported success
    pub fn succeeded(&self) -> bool {
        self.step == Step::Done && self.task_done && self.generation_error.is_none()
    }
}
