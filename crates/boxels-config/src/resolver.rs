//! Configuration resolution
//!
//! The `ConfigResolver` produces the engine-ready configuration for one
//! project root:
//!
//! 1. **Baseline** - built-in defaults anchored at the root
//! 2. **User config** - the first `boxels.config.*` candidate, transformed
//!    to the engine schema
//!
//! Global styles configured by the user are then injected into the SCSS
//! prelude. Command-line overrides are not applied here; each command
//! merges its own layer on top of the resolved configuration with
//! [`merge_config`](crate::merge::merge_config).

use std::path::{Path, PathBuf};

use crate::baseline::baseline_config;
use crate::engine::{EngineConfig, ResolvedConfig, SCSS_PRELUDE_PATH};
use crate::error::{Error, Result};
use crate::loader::{LocatedConfig, load_user_config, locate_config};
use crate::merge::merge_config;
use crate::transform::{TransformedConfig, transform_config};

/// Resolves the configuration of a project root
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    root: PathBuf,
    baseline: EngineConfig,
}

impl ConfigResolver {
    /// Create a resolver for the given project root
    ///
    /// The baseline is computed once here and reused by every resolution.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let baseline = baseline_config(&root);
        Self { root, baseline }
    }

    /// Create a resolver for the process working directory
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(Error::WorkingDir)?;
        Ok(Self::new(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The built-in defaults for this root
    pub fn baseline(&self) -> &EngineConfig {
        &self.baseline
    }

    /// The configuration file that `resolve` would load, if any
    pub fn locate(&self) -> Option<LocatedConfig> {
        locate_config(&self.root)
    }

    /// Check if a configuration file exists
    pub fn has_config(&self) -> bool {
        self.locate().is_some()
    }

    /// Load and transform the first candidate file
    ///
    /// Returns `None` when no candidate exists. A candidate that exists but
    /// cannot be loaded is an error; no other candidate is tried after it.
    pub fn load(&self) -> Result<Option<TransformedConfig>> {
        let Some(located) = self.locate() else {
            tracing::debug!(root = ?self.root, "No config file found, using baseline");
            return Ok(None);
        };

        let user_config = load_user_config(&located)?;
        tracing::debug!(file = located.file_name, "Loaded user config");
        let transformed = transform_config(&user_config).map_err(|e| Error::ConfigShape {
            file: located.file_name.to_string(),
            path: located.path.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(transformed))
    }

    /// Resolve the configuration
    ///
    /// Returns the baseline unchanged when no candidate file exists.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let Some(transformed) = self.load()? else {
            return Ok(self.baseline.clone());
        };

        tracing::debug!("Merging user config over baseline");
        let mut resolved = merge_config(&self.baseline, &transformed.engine);

        if let Some(styles) = transformed.global_styles() {
            inject_global_styles(&mut resolved, styles);
        }

        Ok(resolved)
    }
}

/// Append a `@use "<path>" as *;` line to the SCSS prelude
///
/// The nested `css.preprocessorOptions.scss` structure is created when
/// absent. The line is appended at most once. Returns whether the prelude
/// changed.
pub fn inject_global_styles(config: &mut EngineConfig, styles: &str) -> bool {
    let directive = format!("@use \"{styles}\" as *;");
    let prelude = config.scss_prelude().unwrap_or_default();

    if prelude.lines().any(|line| line.trim() == directive) {
        tracing::warn!(styles, "Global styles already present in SCSS prelude");
        return false;
    }

    let updated = format!("{prelude}\n{directive}");
    config.set(&SCSS_PRELUDE_PATH, updated.into());
    true
}

/// Resolve the configuration of `cwd`, or of the working directory
pub fn resolve_boxels_config(cwd: Option<&Path>) -> Result<ResolvedConfig> {
    let resolver = match cwd {
        Some(dir) => ConfigResolver::new(dir),
        None => ConfigResolver::from_current_dir()?,
    };
    resolver.resolve()
}
