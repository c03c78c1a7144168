//! Layered merge of configuration trees
//!
//! Each composite field declares how a higher layer combines with the one
//! below it. The tables are plain data, so a merge is a fold over the
//! overriding object that looks up one strategy per key path:
//!
//! - `ShallowUnion` - key-wise union; the override's value for a shared key
//!   replaces the base value. Nested paths may declare their own strategy.
//! - `Concatenate` - base entries first, override entries appended.
//! - `Replace` - the default; the override value replaces the base value.
//!
//! A key counts as set when it is present in the override, `null`
//! included. Typed layers skip unset optional fields when serialized, so
//! an unset field never erases the layer below.

use serde_json::{Map, Value};

use crate::engine::EngineConfig;
use crate::schema::UserConfig;

/// How an overriding layer combines with the base for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    Replace,
    ShallowUnion,
    Concatenate,
}

/// Strategy table keyed by dotted field path
pub type MergeRules = [(&'static str, MergeStrategy)];

/// Rules for composing two `UserConfig` layers
pub const USER_MERGE_RULES: &MergeRules = &[
    ("alias", MergeStrategy::ShallowUnion),
    ("define", MergeStrategy::ShallowUnion),
    ("plugins", MergeStrategy::Concatenate),
    ("server", MergeStrategy::ShallowUnion),
    ("build", MergeStrategy::ShallowUnion),
];

/// Rules for layering engine configurations (baseline, user, command)
pub const ENGINE_MERGE_RULES: &MergeRules = &[
    ("resolve", MergeStrategy::ShallowUnion),
    ("resolve.alias", MergeStrategy::ShallowUnion),
    ("define", MergeStrategy::ShallowUnion),
    ("plugins", MergeStrategy::Concatenate),
    ("server", MergeStrategy::ShallowUnion),
    ("preview", MergeStrategy::ShallowUnion),
    ("build", MergeStrategy::ShallowUnion),
    ("optimizeDeps", MergeStrategy::ShallowUnion),
    ("esbuild", MergeStrategy::ShallowUnion),
    ("css", MergeStrategy::ShallowUnion),
    ("css.preprocessorOptions", MergeStrategy::ShallowUnion),
];

/// Look up the strategy for a field path, defaulting to `Replace`
pub fn strategy_for(rules: &MergeRules, path: &str) -> MergeStrategy {
    rules
        .iter()
        .find(|(rule_path, _)| *rule_path == path)
        .map(|(_, strategy)| *strategy)
        .unwrap_or(MergeStrategy::Replace)
}

/// Merge `overlay` on top of `base` following `rules`
///
/// When both values are objects, the result is the union of their keys.
/// Otherwise the overlay wins.
pub fn merge_value(base: &Value, overlay: &Value, rules: &MergeRules) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(merge_objects(base_map, overlay_map, "", rules))
        }
        _ => overlay.clone(),
    }
}

fn merge_objects(
    base: &Map<String, Value>,
    overlay: &Map<String, Value>,
    prefix: &str,
    rules: &MergeRules,
) -> Map<String, Value> {
    let mut merged = base.clone();

    for (key, overlay_value) in overlay {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        let value = match (strategy_for(rules, &path), merged.get(key), overlay_value) {
            (
                MergeStrategy::ShallowUnion,
                Some(Value::Object(base_child)),
                Value::Object(overlay_child),
            ) => Value::Object(merge_objects(base_child, overlay_child, &path, rules)),
            (
                MergeStrategy::Concatenate,
                Some(Value::Array(base_items)),
                Value::Array(overlay_items),
            ) => Value::Array(base_items.iter().chain(overlay_items).cloned().collect()),
            _ => overlay_value.clone(),
        };

        merged.insert(key.clone(), value);
    }

    merged
}

/// Layer `overrides` on top of `base` with the engine merge rules
///
/// Layers are applied left to right: baseline, then the loaded user
/// configuration, then command overrides.
pub fn merge_config(base: &EngineConfig, overrides: &EngineConfig) -> EngineConfig {
    EngineConfig::from_map(merge_objects(
        base.as_map(),
        overrides.as_map(),
        "",
        ENGINE_MERGE_RULES,
    ))
}

/// Compose two user configurations, the second taking precedence
///
/// `alias`, `define`, `server` and `build` are unioned one level deep,
/// `plugins` are concatenated and every other field is replaced.
pub fn merge_user_config(
    base: &UserConfig,
    overrides: &UserConfig,
) -> serde_json::Result<UserConfig> {
    let merged = merge_value(&base.to_value()?, &overrides.to_value()?, USER_MERGE_RULES);
    UserConfig::from_value(merged)
}
