/// Terminal User Interface module for the interactive wizard
pub mod wizard;

use crate::config::WizardConfig;
use crate::Result;

pub use wizard::state::WizardState;

/// Run the interactive project wizard and hand back its final state
pub async fn run_wizard(config: WizardConfig) -> Result<WizardState> {
    wizard::run(config).await
}
