use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// boilerplate-cli: package oriented design boilerplate generator for Go
#[derive(Parser, Debug)]
#[command(name = "boilerplate-cli")]
#[command(version)]
#[command(about = "A package oriented design boilerplate generator.")]
#[command(
    long_about = "Launches an interactive wizard that asks for a project name, project kind, framework and database, then scaffolds a Go project in the current directory."
)]
pub struct Cli {
    /// Log verbosity written to the log file (RUST_LOG overrides it)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Directory for the log file (defaults to the platform cache directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
