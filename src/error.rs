use std::path::PathBuf;
use thiserror::Error;

/// Wm error types
#[derive(Error, Debug)]
pub enum WmError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date error: unable to parse '{0}'")]
    DateParse(String),

    #[error("Search term error: could not compile '{term}': {source}")]
    SearchTerm { term: String, source: regex::Error },

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("File error at '{}': {}", .path.display(), .source)]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for wm operations
pub type Result<T> = std::result::Result<T, WmError>;
