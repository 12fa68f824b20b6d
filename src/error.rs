use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to {action} {}: {source}", path.display())]
    FileAccess {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No weather station names found in {}", path.display())]
    NoStations { path: PathBuf },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl GeneratorError {
    pub fn file_access(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            action,
            path: path.into(),
            source,
        }
    }
}
