//! Error types for bitplayerctl CLI

use bitplayer_board::BoardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Board error: {0}")]
    BoardError(#[from] BoardError),
}

impl CliError {
    /// Process exit code for this error. 1 is kept for a `check` that did
    /// not match.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::IoError(_) => 2,
            CliError::ValidationError(_)
            | CliError::InvalidConfiguration(_)
            | CliError::JsonError(_)
            | CliError::YamlError(_)
            | CliError::BoardError(_) => 4,
        }
    }
}
