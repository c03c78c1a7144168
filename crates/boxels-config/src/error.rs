//! Error types for boxels-config

use std::path::PathBuf;

/// Result type for boxels-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a project configuration
///
/// A missing configuration file is not an error: resolution falls back to
/// the baseline. Every variant here is fatal for the invoking command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A candidate file exists but could not be read or parsed, or its
    /// root value is not an object
    #[error("Failed to load configuration from \"{file}\": {source}")]
    ConfigLoad {
        file: String,
        path: PathBuf,
        #[source]
        source: LoadCause,
    },

    /// The root object does not match the configuration schema
    #[error("Invalid configuration in \"{file}\": {message}")]
    ConfigShape {
        file: String,
        path: PathBuf,
        message: String,
    },

    /// The working directory could not be determined
    #[error("Cannot determine the working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// The blocking load task did not complete
    #[error("Configuration load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Name of the configuration file that caused the error, if any
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::ConfigLoad { file, .. } | Self::ConfigShape { file, .. } => Some(file),
            Self::WorkingDir(_) | Self::Task(_) => None,
        }
    }

    /// Whether this is a `ConfigLoad` error
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::ConfigLoad { .. })
    }
}

/// Underlying cause of a [`Error::ConfigLoad`]
#[derive(Debug, thiserror::Error)]
pub enum LoadCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its root value is not an object
    #[error("the document root must be an object, found {found}")]
    NotAnObject { found: &'static str },
}
