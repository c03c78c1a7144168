//! Locating and loading the project configuration file
//!
//! The project root is searched for a fixed, ordered list of candidate
//! filenames. The first existing file wins; the others are never read.
//! Loading is the only place where user-supplied content enters the
//! pipeline: the document is parsed, its root is required to be an object
//! and it is type-checked against [`UserConfig`] before anything else sees
//! it.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, LoadCause, Result};
use crate::schema::UserConfig;

/// Document formats accepted for the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Parse a document into a generic value
    pub fn parse(&self, content: &str) -> std::result::Result<Value, LoadCause> {
        let value = match self {
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(value)
    }
}

/// Candidate configuration filenames, in priority order
pub const CONFIG_FILENAMES: [&str; 4] = [
    "boxels.config.toml",
    "boxels.config.json",
    "boxels.config.yaml",
    "boxels.config.yml",
];

/// A configuration file found in the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedConfig {
    /// Candidate filename that matched
    pub file_name: &'static str,
    pub path: PathBuf,
    pub format: ConfigFormat,
}

/// Find the first candidate configuration file in `dir`
pub fn locate_config(dir: &Path) -> Option<LocatedConfig> {
    for file_name in CONFIG_FILENAMES {
        let path = dir.join(file_name);
        if !path.is_file() {
            tracing::trace!(?path, "Config candidate not found");
            continue;
        }

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ConfigFormat::from_extension)?;

        tracing::debug!(?path, format = format.name(), "Found config file");
        return Some(LocatedConfig {
            file_name,
            path,
            format,
        });
    }

    None
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read, parse and type-check a located configuration file
pub fn load_user_config(located: &LocatedConfig) -> Result<UserConfig> {
    let load_error = |source: LoadCause| Error::ConfigLoad {
        file: located.file_name.to_string(),
        path: located.path.clone(),
        source,
    };

    let content = fs::read_to_string(&located.path).map_err(|e| load_error(e.into()))?;
    let document = located.format.parse(&content).map_err(load_error)?;

    if !document.is_object() {
        return Err(load_error(LoadCause::NotAnObject {
            found: value_kind(&document),
        }));
    }

    UserConfig::from_value(document).map_err(|e| Error::ConfigShape {
        file: located.file_name.to_string(),
        path: located.path.clone(),
        message: e.to_string(),
    })
}
