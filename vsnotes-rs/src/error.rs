//! Error types and exit codes for vsnotes.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const STORE_NOT_FOUND: i32 = 2;
    pub const TEMPLATE_NOT_FOUND: i32 = 3;
    pub const INVALID_CONFIG: i32 = 4;
}

/// Main error type for vsnotes operations.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Note store not found at: {0}")]
    StoreNotFound(PathBuf),

    #[error("No note folder configured. Set default-note-path or pass --store")]
    NoteFolderNotConfigured,

    #[error("Template \"{name}\" not found in {path}")]
    TemplateNotFound { name: String, path: PathBuf },

    #[error("Invalid templates file {path}: {message}")]
    InvalidTemplates { path: PathBuf, message: String },

    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl NotesError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NotesError::StoreNotFound(_) | NotesError::NoteFolderNotConfigured => {
                exit_code::STORE_NOT_FOUND
            }
            NotesError::TemplateNotFound { .. } => exit_code::TEMPLATE_NOT_FOUND,
            NotesError::InvalidIgnorePattern { .. }
            | NotesError::ConfigError(_)
            | NotesError::TomlParse(_) => exit_code::INVALID_CONFIG,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for vsnotes operations.
pub type Result<T> = std::result::Result<T, NotesError>;
