//! Mapping from the user-facing schema to the engine schema
//!
//! Engine-relevant fields are rewritten into the layout the build engine
//! expects. Everything else is returned untouched as extra fields for the
//! resolver's post-processing.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::baseline::JSX_IMPORT_SOURCE;
use crate::engine::EngineConfig;
use crate::schema::UserConfig;

/// Key of the global stylesheet path among the extra fields
pub const GLOBAL_STYLES_KEY: &str = "globalStyles";

/// Result of transforming a `UserConfig`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformedConfig {
    /// Engine-level layer, ready to merge over the baseline
    pub engine: EngineConfig,

    /// Fields the engine does not understand (e.g. `globalStyles`)
    pub extra: Map<String, Value>,
}

impl TransformedConfig {
    /// The configured global stylesheet, if it is a non-empty string
    pub fn global_styles(&self) -> Option<&str> {
        self.extra
            .get(GLOBAL_STYLES_KEY)
            .and_then(Value::as_str)
            .filter(|path| !path.is_empty())
    }
}

fn insert_some<T: Serialize>(
    map: &mut Map<String, Value>,
    key: &str,
    value: Option<&T>,
) -> serde_json::Result<()> {
    if let Some(value) = value {
        map.insert(key.to_string(), serde_json::to_value(value)?);
    }
    Ok(())
}

/// Transform a user configuration into an engine layer plus extra fields
///
/// Fails only when a field cannot be represented as JSON, such as a path
/// that is not valid UTF-8.
pub fn transform_config(config: &UserConfig) -> serde_json::Result<TransformedConfig> {
    let mut engine = Map::new();

    let resolve = match &config.alias {
        Some(alias) => json!({ "alias": alias }),
        None => json!({}),
    };
    engine.insert("resolve".to_string(), resolve);

    insert_some(&mut engine, "define", config.define.as_ref())?;
    insert_some(&mut engine, "plugins", config.plugins.as_ref())?;
    insert_some(&mut engine, "publicDir", config.public_dir.as_ref())?;
    insert_some(&mut engine, "root", config.root.as_ref())?;
    insert_some(&mut engine, "server", config.server.as_ref())?;

    if let Some(build) = &config.build {
        let mut build_value = match serde_json::to_value(build)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let input = match &build.input {
            Some(input) => serde_json::to_value(input)?,
            None => Value::String(String::new()),
        };
        // rollupOptions replaces the baseline's as a whole, so the JSX
        // runtime is carried over here
        let mut rollup = Map::new();
        rollup.insert("input".to_string(), input);
        insert_some(&mut rollup, "external", config.exclude.as_ref())?;
        rollup.insert(
            "jsx".to_string(),
            json!({ "jsxImportSource": JSX_IMPORT_SOURCE }),
        );

        build_value.insert("rollupOptions".to_string(), Value::Object(rollup));
        engine.insert("build".to_string(), Value::Object(build_value));
    }

    let mut optimize_deps = Map::new();
    insert_some(&mut optimize_deps, "include", config.include.as_ref())?;
    insert_some(&mut optimize_deps, "exclude", config.exclude.as_ref())?;
    engine.insert("optimizeDeps".to_string(), Value::Object(optimize_deps));

    let mut extra = config.extra.clone();
    insert_some(&mut extra, GLOBAL_STYLES_KEY, config.global_styles.as_ref())?;

    Ok(TransformedConfig {
        engine: EngineConfig::from_map(engine),
        extra,
    })
}
