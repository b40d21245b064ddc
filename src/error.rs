use std::path::PathBuf;

pub use crate::domain::BoardError;

/// Errors that can occur when loading configuration or parsing arguments.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid arguments: {0}")]
    Arguments(String),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}

/// Errors surfaced by the binaries.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}
