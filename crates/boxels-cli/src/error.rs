//! Error types for boxels-cli

use std::fmt;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// One rejected command-line flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionError {
    /// Flag as typed on the command line (e.g. `--root`)
    pub flag: String,
    pub message: String,
}

impl OptionError {
    pub fn new(flag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.flag, self.message)
    }
}

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from configuration resolution
    #[error(transparent)]
    Config(#[from] boxels_config::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Invalid flags; each flag is listed once
    #[error("invalid options for `{command}`:{}", format_option_errors(.errors))]
    InvalidOptions {
        command: &'static str,
        errors: Vec<OptionError>,
    },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

fn format_option_errors(errors: &[OptionError]) -> String {
    errors.iter().map(|error| format!("\n  {error}")).collect()
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Build an `InvalidOptions` error, keeping the first error per flag
    ///
    /// Returns `None` when `errors` is empty.
    pub fn invalid_options(command: &'static str, errors: Vec<OptionError>) -> Option<Self> {
        let mut unique: Vec<OptionError> = Vec::with_capacity(errors.len());
        for error in errors {
            if !unique.iter().any(|seen| seen.flag == error.flag) {
                unique.push(error);
            }
        }

        if unique.is_empty() {
            None
        } else {
            Some(Self::InvalidOptions {
                command,
                errors: unique,
            })
        }
    }
}
