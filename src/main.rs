use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use boilerplate_cli::{
    cli::tui::{run_wizard, wizard::render},
    cli::Cli,
    config::WizardConfig,
    logging,
};
use clap::Parser;
use tracing::{error, info};

/// Upper bound on waiting for leftover blocking work once the wizard returned
const RUNTIME_SHUTDOWN: Duration = Duration::from_secs(1);

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _guard = match logging::init(cli.log_level.to_filter_directive(), &log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    };

    match run() {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Wizard failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let config = WizardConfig::default();
    info!(output_dir = %config.output_dir.display(), "Starting wizard");

    let outcome = runtime.block_on(run_wizard(config));
    match &outcome {
        // A detached generation task must not hold the process open
        Ok(state) if state.interrupted => runtime.shutdown_background(),
        _ => runtime.shutdown_timeout(RUNTIME_SHUTDOWN),
    }

    let state = outcome.context("wizard did not run")?;
    println!("{}", render::summary(&state));

    if state.generation_error.is_some() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
