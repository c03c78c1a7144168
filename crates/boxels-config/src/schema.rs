//! User-facing configuration schema
//!
//! `UserConfig` is the high-level document a project writes in
//! `boxels.config.{toml,json,yaml,yml}`. Every field is optional; an unset
//! field inherits from the layer below. Keys are camelCase, with snake_case
//! aliases for multi-word keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// CLI metadata
pub mod metadata {
    /// Name of the command-line binary
    pub const NAME: &str = "box";

    /// Version reported by the command-line binary
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Execution modes recognised by Boxels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
    Test,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Development, Mode::Production, Mode::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
            Mode::Test => "test",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown mode '{}', expected one of: development, production, test",
                    s
                )
            })
    }
}

/// Target of a path alias: one path or an ordered list of candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasTarget {
    Path(String),
    Paths(Vec<String>),
}

impl From<&str> for AliasTarget {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

/// Dev-server host: `true` listens on all addresses, a string names one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostOption {
    Enabled(bool),
    Address(String),
}

/// Development server options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<HostOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, alias = "strict_port", skip_serializing_if = "Option::is_none")]
    pub strict_port: Option<bool>,

    /// Server options not modelled here, passed to the engine as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Production build options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    #[serde(
        default,
        alias = "chunk_size_error_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub chunk_size_error_limit: Option<Number>,

    #[serde(
        default,
        alias = "chunk_size_warning_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub chunk_size_warning_limit: Option<Number>,

    #[serde(default, alias = "empty_out_dir", skip_serializing_if = "Option::is_none")]
    pub empty_out_dir: Option<bool>,

    /// Entry HTML file, becomes `rollupOptions.input`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<bool>,

    #[serde(default, alias = "out_dir", skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Build options not modelled here, passed to the engine as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// High-level project configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Path aliases (`resolve.alias` for the engine)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<BTreeMap<String, AliasTarget>>,

    /// Compile-time constants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub define: Option<Map<String, Value>>,

    /// Dependencies kept out of the bundle and of pre-bundling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Dependencies forced into pre-bundling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Stylesheet injected into every SCSS module with `@use ... as *`
    #[serde(default, alias = "global_styles", skip_serializing_if = "Option::is_none")]
    pub global_styles: Option<PathBuf>,

    /// Opaque plugin descriptors, handed to the engine in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<Value>>,

    #[serde(default, alias = "public_dir", skip_serializing_if = "Option::is_none")]
    pub public_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildOptions>,

    /// Keys this schema does not know, kept for forward compatibility
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserConfig {
    /// Parse a user configuration from an already-decoded object
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Serialize to a JSON object, omitting unset fields
    ///
    /// Fails when a path field is not valid UTF-8.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
