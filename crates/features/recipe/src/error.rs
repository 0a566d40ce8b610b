use std::path::PathBuf;
use vio_kernel::process::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("Option assignment '{0}' must have the form name=value")]
    MalformedAssignment(String),

    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Option '{name}' is not available: {reason}")]
    RemovedOption { name: String, reason: &'static str },

    #[error("Invalid value '{value}' for option '{name}', expected True or False")]
    InvalidOptionValue { name: String, value: String },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Failed to serialize '{}': {source}", .path.display())]
    Json { path: PathBuf, source: serde_json::Error },

    #[error(transparent)]
    Process(#[from] ProcessError),
}
