//! End-to-end integration test for the resolution pipeline
//!
//! This test exercises the complete flow: locate -> load -> transform ->
//! merge over the baseline -> style injection -> command overrides.

use boxels_config::{
    ConfigCache, ConfigResolver, EngineConfig, baseline_config, inject_global_styles,
    load_user_config, locate_config, merge_config, transform_config,
};
use boxels_test_utils::project::TestProject;
use boxels_test_utils::templates::FULL_YAML;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;

#[test]
fn manual_pipeline_matches_resolver() {
    let project = TestProject::new();
    project.write_config("boxels.config.yaml", FULL_YAML);

    // Step 1: locate the configuration
    let located = locate_config(project.root()).expect("config should be found");
    assert_eq!(located.file_name, "boxels.config.yaml");

    // Step 2: load and type-check it
    let user = load_user_config(&located).unwrap();
    assert_eq!(user.global_styles.as_deref(), Some(Path::new("styles/_globals.scss")));

    // Step 3: transform to the engine schema
    let transformed = transform_config(&user).unwrap();
    assert_eq!(transformed.global_styles(), Some("styles/_globals.scss"));

    // Step 4: merge over the baseline and inject the global styles
    let mut expected = merge_config(&baseline_config(project.root()), &transformed.engine);
    assert!(inject_global_styles(&mut expected, "styles/_globals.scss"));

    let resolved = ConfigResolver::new(project.root()).resolve().unwrap();
    assert_eq!(resolved, expected);
}

#[tokio::test]
async fn command_overrides_layer_over_the_cached_resolution() {
    let project = TestProject::new();
    project.write_config(
        "boxels.config.json",
        r#"{
            "root": "src",
            "server": { "port": 3000 },
            "build": { "input": "src/index.html", "outDir": "build" },
            "exclude": ["fsevents"]
        }"#,
    );
    let cache = ConfigCache::new(ConfigResolver::new(project.root()));

    let mut serve = EngineConfig::new();
    serve.set(&["server", "port"], json!(8080));
    serve.set(&["mode"], json!("development"));

    let mut build = EngineConfig::new();
    build.set(&["build", "outDir"], json!("out"));

    let resolved = cache.get_or_resolve().await.unwrap();
    let serve_config = merge_config(&resolved, &serve);
    let build_config = merge_config(&resolved, &build);

    // Each command sees its own flags on top of the same resolution
    assert_eq!(serve_config.server_port(), Some(8080));
    assert_eq!(serve_config.out_dir(), Some("build"));
    assert_eq!(build_config.server_port(), Some(3000));
    assert_eq!(build_config.out_dir(), Some("out"));

    // Overrides never leak back into the cache
    let cached = cache.cached().await.unwrap();
    assert_eq!(cached.server_port(), Some(3000));
    assert_eq!(cached.get(&["mode"]), None);

    assert_eq!(
        build_config.get(&["build", "rollupOptions"]),
        Some(&json!({
            "input": "src/index.html",
            "external": ["fsevents"],
            "jsx": { "jsxImportSource": "boxels" }
        }))
    );
}

#[test]
fn precedence_is_command_then_user_then_baseline() {
    let project = TestProject::new();
    project.write_config(
        "boxels.config.toml",
        "publicDir = \"assets\"\n\n[server]\nport = 3000\nopen = true\n",
    );
    let resolved = ConfigResolver::new(project.root()).resolve().unwrap();

    let mut command = EngineConfig::new();
    command.set(&["server", "port"], json!(9000));
    let config = merge_config(&resolved, &command);

    assert_eq!(config.get(&["server", "port"]), Some(&json!(9000)));
    assert_eq!(config.get(&["server", "open"]), Some(&json!(true)));
    assert_eq!(config.get(&["server", "strictPort"]), Some(&json!(true)));
    assert_eq!(config.public_dir(), Some("assets"));
    assert_eq!(
        config.get_str(&["cacheDir"]),
        baseline_config(project.root()).get_str(&["cacheDir"])
    );
}
