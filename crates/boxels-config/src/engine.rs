//! Engine-level configuration
//!
//! The build engine consumes a loosely-typed object tree (`resolve.alias`,
//! `build.rollupOptions`, `css.preprocessorOptions`, ...). `EngineConfig`
//! wraps that tree and offers path-based access to it. Paths are slices of
//! keys rather than dotted strings because `define` keys routinely contain
//! dots (`process.env.API_URL`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Engine configuration tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngineConfig(Map<String, Value>);

/// The final, fully-merged configuration handed to the build engine
pub type ResolvedConfig = EngineConfig;

impl EngineConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the top-level key is present (even if its value is `null`)
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Look up a value by key path
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.get(*key))
    }

    /// Look up a string value by key path
    pub fn get_str(&self, path: &[&str]) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Set a value by key path, creating intermediate objects as needed
    ///
    /// A non-object value found on the way is replaced by an object.
    /// An empty path leaves the configuration untouched.
    pub fn set(&mut self, path: &[&str], value: Value) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };

        let mut current = &mut self.0;
        for key in parents {
            let entry = current
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(map) = entry else {
                return;
            };
            current = map;
        }
        current.insert((*last).to_string(), value);
    }

    /// Set a top-level key
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn root(&self) -> Option<&str> {
        self.get_str(&["root"])
    }

    pub fn public_dir(&self) -> Option<&str> {
        self.get_str(&["publicDir"])
    }

    pub fn out_dir(&self) -> Option<&str> {
        self.get_str(&["build", "outDir"])
    }

    pub fn server_port(&self) -> Option<u64> {
        self.get(&["server", "port"]).and_then(Value::as_u64)
    }

    /// The SCSS prelude prepended to every stylesheet module
    pub fn scss_prelude(&self) -> Option<&str> {
        self.get_str(&SCSS_PRELUDE_PATH)
    }

    /// Pretty-printed JSON, the form handed to the build engine
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Location of the SCSS prelude inside the engine configuration
pub(crate) const SCSS_PRELUDE_PATH: [&str; 4] =
    ["css", "preprocessorOptions", "scss", "additionalData"];

impl From<Map<String, Value>> for EngineConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for EngineConfig {
    type Error = Value;

    /// Succeeds only for object values; anything else is handed back
    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
