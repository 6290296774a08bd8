pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;

pub use error::{BoilerplateError, Result};
