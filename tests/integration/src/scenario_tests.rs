//! Scenario tests for project configurations
//!
//! Each test builds a realistic project directory and checks what the
//! build engine would receive for it.

use std::sync::Arc;

use boxels_config::{
    ConfigCache, ConfigResolver, EngineConfig, Error, UserConfig, merge_config,
    merge_user_config,
};
use boxels_test_utils::project::TestProject;
use boxels_test_utils::templates::{BASIC_TOML, ROUTING_JSON};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

// =============================================================================
// Composed configurations
// =============================================================================

#[test]
fn shared_preset_composed_with_project_config() {
    let preset = UserConfig::from_value(json!({
        "alias": { "@": "src" },
        "plugins": [{ "name": "box-components" }],
        "server": { "port": 3000 },
        "define": { "__BRAND__": "\"boxels\"" }
    }))
    .unwrap();
    let project_layer = UserConfig::from_value(json!({
        "alias": { "~lib": ["lib", "vendor/lib"] },
        "plugins": [{ "name": "box-router" }],
        "server": { "open": true },
        "root": "app"
    }))
    .unwrap();

    let composed = merge_user_config(&preset, &project_layer).unwrap();

    let project = TestProject::new();
    project.write_config(
        "boxels.config.json",
        &serde_json::to_string_pretty(&composed).unwrap(),
    );
    let config = ConfigResolver::new(project.root()).resolve().unwrap();

    assert_eq!(
        config.get(&["resolve", "alias"]),
        Some(&json!({ "@": "src", "~lib": ["lib", "vendor/lib"] }))
    );
    assert_eq!(
        config.get(&["plugins"]),
        Some(&json!([
            { "name": "vite-tsconfig-paths" },
            { "name": "box-components" },
            { "name": "box-router" }
        ]))
    );
    assert_eq!(config.server_port(), Some(3000));
    assert_eq!(config.get(&["server", "open"]), Some(&json!(true)));
    assert_eq!(config.root(), Some("app"));
    assert_eq!(config.get(&["define", "__BRAND__"]), Some(&json!("\"boxels\"")));
}

#[test]
fn snake_case_keys_read_naturally_in_toml() {
    let project = TestProject::new();
    project.write_config(
        "boxels.config.toml",
        r#"public_dir = "static"
global_styles = "styles/app.scss"

[server]
strict_port = false

[build]
out_dir = "out"
empty_out_dir = false
chunk_size_warning_limit = 1024
"#,
    );

    let config = ConfigResolver::new(project.root()).resolve().unwrap();

    assert_eq!(config.public_dir(), Some("static"));
    assert_eq!(config.get(&["server", "strictPort"]), Some(&json!(false)));
    assert_eq!(config.out_dir(), Some("out"));
    assert_eq!(config.get(&["build", "emptyOutDir"]), Some(&json!(false)));
    assert_eq!(config.get(&["build", "chunkSizeWarningLimit"]), Some(&json!(1024)));
    assert!(
        config
            .scss_prelude()
            .unwrap()
            .contains("@use \"styles/app.scss\" as *;")
    );
}

#[test]
fn unknown_fields_pass_through_where_the_engine_reads_them() {
    let project = TestProject::new();
    project.write_config(
        "boxels.config.json",
        r#"{
            "experimental": { "islands": true },
            "server": { "proxy": { "/api": "http://localhost:8080" } },
            "build": { "input": "index.html", "reportCompressedSize": false }
        }"#,
    );

    let config = ConfigResolver::new(project.root()).resolve().unwrap();

    // Top-level extras stay with the resolver, nested extras reach the engine
    assert!(!config.contains_key("experimental"));
    assert_eq!(
        config.get(&["server", "proxy"]),
        Some(&json!({ "/api": "http://localhost:8080" }))
    );
    assert_eq!(
        config.get(&["build", "reportCompressedSize"]),
        Some(&json!(false))
    );
}

// =============================================================================
// Presence and reset semantics
// =============================================================================

#[test]
fn define_entries_can_be_reset_with_null() {
    let project = TestProject::new();
    project.write_config(
        "boxels.config.yaml",
        "define:\n  __DEBUG__: ~\n  __API__: '\"/api\"'\n",
    );

    let config = ConfigResolver::new(project.root()).resolve().unwrap();

    assert_eq!(
        config.get(&["define"]),
        Some(&json!({ "__DEBUG__": null, "__API__": "\"/api\"" }))
    );
}

#[test]
fn explicit_null_in_a_layer_replaces_the_value_below() {
    let project = TestProject::new();
    project.write_config("boxels.config.json", ROUTING_JSON);
    let resolved = ConfigResolver::new(project.root()).resolve().unwrap();

    let mut layer = EngineConfig::new();
    layer.insert("publicDir", Value::Null);
    let config = merge_config(&resolved, &layer);

    assert_eq!(config.get(&["publicDir"]), Some(&Value::Null));
    assert_eq!(config.root(), Some("src"));
}

#[test]
fn unset_user_fields_never_erase_the_baseline() {
    let project = TestProject::new();
    project.write_config("boxels.config.json", r#"{ "publicDir": null, "server": {} }"#);

    let config = ConfigResolver::new(project.root()).resolve().unwrap();
    let baseline = ConfigResolver::new(project.root()).baseline().clone();

    assert_eq!(config.public_dir(), baseline.public_dir());
    assert_eq!(config.get(&["server"]), baseline.get(&["server"]));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn failures_name_the_offending_file() {
    let cases = [
        ("boxels.config.toml", "root = [1, 2"),
        ("boxels.config.json", "[1, 2, 3]"),
        ("boxels.config.yaml", "- just\n- a\n- list\n"),
        ("boxels.config.yml", "server: \"not a table\"\n"),
    ];

    for (file, content) in cases {
        let project = TestProject::new();
        project.write_config(file, content);

        let error = ConfigResolver::new(project.root()).resolve().unwrap_err();

        assert_eq!(error.file(), Some(file), "{file}: {error}");
        assert!(error.to_string().contains(file));
    }
}

#[test]
fn shape_errors_are_distinguished_from_load_errors() {
    let project = TestProject::new();
    project.write_config("boxels.config.json", r#"{ "server": { "port": "eighty" } }"#);

    let error = ConfigResolver::new(project.root()).resolve().unwrap_err();

    assert!(matches!(error, Error::ConfigShape { .. }));
    assert!(!error.is_load_error());
}

// =============================================================================
// Caching across projects
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn caches_for_different_projects_resolve_in_parallel() {
    let basic = TestProject::new();
    basic.write_config("boxels.config.toml", BASIC_TOML);
    let routing = TestProject::new();
    routing.write_config("boxels.config.json", ROUTING_JSON);

    let basic_cache = Arc::new(ConfigCache::new(ConfigResolver::new(basic.root())));
    let routing_cache = Arc::new(ConfigCache::new(ConfigResolver::new(routing.root())));

    let (basic_config, routing_config) = tokio::join!(
        basic_cache.get_or_resolve(),
        routing_cache.get_or_resolve()
    );

    assert_eq!(basic_config.unwrap().public_dir(), Some("public"));
    assert_eq!(routing_config.unwrap().public_dir(), Some("../public"));
}
