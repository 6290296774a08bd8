use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoilerplateError {
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A project generation task has already been dispatched for this run")]
    AlreadyDispatched,

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BoilerplateError>;
