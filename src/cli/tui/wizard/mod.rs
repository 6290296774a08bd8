/// Interactive project wizard implementation
pub mod app;
pub mod controller;
pub mod dispatcher;
pub mod events;
pub mod list;
pub mod progress;
pub mod render;
pub mod state;
pub mod theme;

use std::sync::Arc;

use crate::config::WizardConfig;
use crate::generator::GoProjectGenerator;
use crate::Result;

/// Entry point for the wizard, scaffolding into `config.output_dir`
pub async fn run(config: WizardConfig) -> Result<state::WizardState> {
    let generator = Arc::new(GoProjectGenerator::new(config.output_dir.clone()));
    let app = app::App::new(config, generator);
    app.run().await
}
