//! Command implementations for boxels-cli
//!
//! Every engine command follows the same steps: validate its flags, build
//! a command override layer from the flags that were given, merge it over
//! the cached resolution and hand the result to the build engine.

pub mod build;
pub mod config;
pub mod preview;
pub mod serve;

pub use build::run_build;
pub use config::run_config;
pub use preview::run_preview;
pub use serve::run_serve;

use std::path::Path;

use boxels_config::{ConfigCache, EngineConfig, ResolvedConfig, merge_config};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use crate::error::{OptionError, Result};

/// Engine-level layer built from command-line flags
///
/// Only flags that were given end up in the layer, so an omitted flag never
/// masks the project configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOverrides {
    layer: EngineConfig,
}

impl CommandOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `path` to `value` when a value was given
    pub fn set<T: Serialize>(&mut self, path: &[&str], value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            match serde_json::to_value(value) {
                Ok(value) => self.layer.set(path, value),
                Err(e) => tracing::warn!(?path, error = %e, "Skipping unserializable override"),
            }
        }
        self
    }

    /// Set a path-valued flag, keeping the path as typed
    pub fn set_path(&mut self, path: &[&str], value: Option<&Path>) -> &mut Self {
        self.set(path, value.map(|p| p.to_string_lossy().into_owned()))
    }

    pub fn is_empty(&self) -> bool {
        self.layer.is_empty()
    }

    pub fn layer(&self) -> &EngineConfig {
        &self.layer
    }

    pub fn into_layer(self) -> EngineConfig {
        self.layer
    }
}

/// Record an error for `flag` when `value` names a missing path
///
/// Relative paths are checked against the project directory.
pub(crate) fn require_existing(
    project: &Path,
    flag: &str,
    value: Option<&Path>,
    message: &str,
    errors: &mut Vec<OptionError>,
) {
    if let Some(value) = value {
        if !project.join(value).exists() {
            errors.push(OptionError::new(flag, message));
        }
    }
}

/// Parse an `--open` value: booleans stay booleans, anything else names a browser
pub(crate) fn parse_open(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        browser => Value::String(browser.to_string()),
    }
}

/// Merge `overrides` over the cached resolution
pub async fn final_config(
    cache: &ConfigCache,
    overrides: CommandOverrides,
) -> Result<ResolvedConfig> {
    let resolved = cache.get_or_resolve().await?;
    tracing::debug!(
        keys = overrides.layer().as_map().len(),
        "Merging command overrides"
    );
    Ok(merge_config(&resolved, &overrides.into_layer()))
}

/// Hand the final configuration to the build engine
///
/// The configuration goes to stdout as JSON; status lines go to stderr.
pub fn hand_off(command: &str, config: &ResolvedConfig) {
    println!("{}", config.to_json_pretty());
    eprintln!(
        "{} Configuration for `{}` handed to the build engine",
        "OK".green().bold(),
        command
    );
}
