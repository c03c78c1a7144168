//! Configuration resolution for Boxels projects
//!
//! This crate turns a project's high-level `boxels.config.*` document into
//! the configuration consumed by the build engine:
//!
//! - **Schema**: the user-facing `UserConfig`
//! - **Baseline**: built-in defaults anchored at the project root
//! - **Transform**: `UserConfig` to engine schema, plus extra fields
//! - **Loader**: candidate lookup, parsing and type-checking
//! - **Merge**: table-driven layering (replace, shallow union, concatenate)
//! - **Resolver** and **Cache**: the pipeline entry points
//!
//! # Pipeline
//!
//! ```text
//!   boxels.config.{toml,json,yaml,yml}
//!                 |
//!           load + check          baseline(root)
//!                 |                     |
//!             transform ---------> merge ---> inject global styles
//!                                                  |
//!                                           ResolvedConfig
//!                                                  |
//!                                  merge(command overrides) per command
//! ```
//!
//! # Example
//!
//! ```no_run
//! use boxels_config::{ConfigCache, ConfigResolver, EngineConfig, merge_config};
//!
//! # async fn example() -> boxels_config::Result<()> {
//! let cache = ConfigCache::new(ConfigResolver::new("/path/to/project"));
//! let resolved = cache.get_or_resolve().await?;
//!
//! let mut overrides = EngineConfig::new();
//! overrides.set(&["server", "port"], 3000.into());
//! let config = merge_config(&resolved, &overrides);
//! assert_eq!(config.server_port(), Some(3000));
//! # Ok(())
//! # }
//! ```

pub mod baseline;
pub mod cache;
pub mod engine;
pub mod error;
pub mod loader;
pub mod merge;
pub mod resolver;
pub mod schema;
pub mod transform;

pub use baseline::baseline_config;
pub use cache::ConfigCache;
pub use engine::{EngineConfig, ResolvedConfig};
pub use error::{Error, LoadCause, Result};
pub use loader::{CONFIG_FILENAMES, ConfigFormat, LocatedConfig, load_user_config, locate_config};
pub use merge::{
    ENGINE_MERGE_RULES, MergeStrategy, USER_MERGE_RULES, merge_config, merge_user_config,
    merge_value,
};
pub use resolver::{ConfigResolver, inject_global_styles, resolve_boxels_config};
pub use schema::{AliasTarget, BuildOptions, HostOption, Mode, ServerOptions, UserConfig, metadata};
pub use transform::{TransformedConfig, transform_config};
