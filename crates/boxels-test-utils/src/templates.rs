//! Configuration documents matching the shipped project templates.

/// Configuration of the `basic` template, as TOML.
pub const BASIC_TOML: &str = r#"root = "src"
publicDir = "public"

[build]
input = "src/index.html"

[[plugins]]
name = "box-components"
"#;

/// Configuration of the `routing` template, as JSON.
pub const ROUTING_JSON: &str = r#"{
  "root": "src",
  "publicDir": "../public",
  "build": {
    "input": "src/index.html"
  }
}
"#;

/// A configuration using every schema field, as YAML.
pub const FULL_YAML: &str = r#"alias:
  "@": src
  "~components": [src/components, src/shared/components]
define:
  __APP_VERSION__: '"1.0.0"'
include: [boxels]
exclude: [fsevents]
globalStyles: styles/_globals.scss
plugins:
  - name: box-components
publicDir: static
root: src
server:
  host: 0.0.0.0
  open: true
  port: 3000
  strictPort: false
build:
  chunkSizeErrorLimit: 1000
  chunkSizeWarningLimit: 500
  emptyOutDir: false
  input: src/index.html
  manifest: true
  outDir: build
  target: es2022
"#;
