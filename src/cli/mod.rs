pub mod app;
pub mod tui;

pub use app::{Cli, LogLevel};
