//! Built-in baseline configuration
//!
//! The baseline is the lowest layer of every resolution. It is derived from
//! the project root only, so two resolvers for the same root always start
//! from identical baselines.

use serde_json::json;
use std::path::Path;

use crate::engine::EngineConfig;

/// Cache directory of the engine, relative to the project root
pub const CACHE_DIR: &str = ".boxels";

/// Default public assets directory, relative to the project root
pub const PUBLIC_DIR: &str = "public";

/// Default build output directory, relative to the project root
pub const OUT_DIR: &str = "dist";

/// Default HTML entry point, relative to the project root
pub const ENTRY_HTML: &str = "index.html";

pub const DEV_SERVER_PORT: u16 = 2468;
pub const PREVIEW_PORT: u16 = 4321;

/// JSX runtime module the engine compiles against
pub const JSX_IMPORT_SOURCE: &str = "boxels";

/// SCSS prelude loaded into every stylesheet module
pub const SCSS_PRELUDE: &str = r#"
@use "sass:color";
@use "sass:list";
@use "sass:map";
@use "sass:math";
@use "sass:meta";
@use "sass:selector";
@use "sass:string";"#;

fn path_string(root: &Path, relative: &str) -> String {
    root.join(relative).to_string_lossy().into_owned()
}

/// Build the baseline engine configuration for a project root
pub fn baseline_config(root: &Path) -> EngineConfig {
    let value = json!({
        "root": root.to_string_lossy(),
        "cacheDir": path_string(root, CACHE_DIR),
        "publicDir": path_string(root, PUBLIC_DIR),

        "esbuild": {
            "jsx": "automatic",
            "jsxImportSource": JSX_IMPORT_SOURCE,
        },

        "server": {
            "port": DEV_SERVER_PORT,
            "open": false,
            "strictPort": true,
            "historyApiFallback": true,
            "hmr": true,
            "cors": true,
        },

        "preview": {
            "port": PREVIEW_PORT,
            "open": false,
        },

        "optimizeDeps": {
            "include": [],
            "exclude": [],
        },

        "build": {
            "target": "esnext",
            "outDir": path_string(root, OUT_DIR),
            "emptyOutDir": true,
            "minify": "esbuild",
            "cssMinify": "esbuild",
            "cssCodeSplit": true,
            "chunkSizeWarningLimit": 200,
            "rollupOptions": {
                "jsx": { "jsxImportSource": JSX_IMPORT_SOURCE },
                "input": { "main": path_string(root, ENTRY_HTML) },
            },
        },

        "css": {
            "modules": {
                "localsConvention": "camelCaseOnly",
                "generateScopedName": "[name]__[local]__[hash:base64:5]",
            },
            "preprocessorOptions": {
                "scss": { "additionalData": SCSS_PRELUDE },
            },
        },

        "logLevel": "silent",
        "plugins": [{ "name": "vite-tsconfig-paths" }],
        "appType": "spa",
    });

    EngineConfig::try_from(value).unwrap_or_default()
}
