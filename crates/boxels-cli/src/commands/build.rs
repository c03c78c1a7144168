//! `box build` - production build

use std::path::Path;

use boxels_config::{ConfigCache, EngineConfig};
use serde_json::{Map, Value};

use super::{CommandOverrides, final_config, hand_off, require_existing};
use crate::cli::{BuildArgs, Minifier, Sourcemap};
use crate::error::{CliError, Result};

impl Sourcemap {
    fn to_value(self) -> Value {
        match self {
            Sourcemap::True => Value::Bool(true),
            Sourcemap::False => Value::Bool(false),
            Sourcemap::Inline => Value::from("inline"),
            Sourcemap::Hidden => Value::from("hidden"),
        }
    }
}

impl Minifier {
    fn to_value(self) -> Value {
        match self {
            Minifier::Esbuild => Value::from("esbuild"),
            Minifier::Terser => Value::from("terser"),
            Minifier::False => Value::Bool(false),
        }
    }
}

/// Check that every path flag names an existing file or directory
pub fn validate(project: &Path, args: &BuildArgs) -> Result<()> {
    let mut errors = Vec::new();
    require_existing(project, "--root", args.root.as_deref(), "directory does not exist", &mut errors);
    require_existing(
        project,
        "--entry",
        args.entry.as_deref(),
        "entry file or directory does not exist",
        &mut errors,
    );
    require_existing(
        project,
        "--public-dir",
        args.public_dir.as_deref(),
        "directory does not exist",
        &mut errors,
    );

    match CliError::invalid_options("build", errors) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Build the override layer for `box build`
///
/// `build.rollupOptions` replaces as a whole when merged, so `--entry`
/// starts from the resolved rollup options and swaps only the input.
pub fn overrides(args: &BuildArgs, resolved: &EngineConfig) -> CommandOverrides {
    let mut overrides = CommandOverrides::new();
    overrides
        .set(&["base"], args.base.as_deref())
        .set(&["mode"], Some(args.mode))
        .set_path(&["root"], args.root.as_deref())
        .set_path(&["publicDir"], args.public_dir.as_deref())
        .set_path(&["build", "outDir"], args.out_dir.as_deref())
        .set(&["build", "sourcemap"], args.sourcemap.map(Sourcemap::to_value))
        .set(&["build", "minify"], args.minify.map(Minifier::to_value))
        .set(&["build", "emptyOutDir"], args.empty_out_dir.then_some(true));

    if let Some(entry) = &args.entry {
        let mut rollup = match resolved.get(&["build", "rollupOptions"]) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        rollup.insert(
            "input".to_string(),
            Value::String(entry.to_string_lossy().into_owned()),
        );
        overrides.set(&["build", "rollupOptions"], Some(Value::Object(rollup)));
    }

    overrides
}

/// Run the build command
pub async fn run_build(cache: &ConfigCache, args: &BuildArgs) -> Result<()> {
    validate(cache.resolver().root(), args)?;

    let resolved = cache.get_or_resolve().await?;
    let config = final_config(cache, overrides(args, &resolved)).await?;

    hand_off("build", &config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::BuildMode;
    use boxels_config::{ConfigResolver, merge_config};
    use boxels_test_utils::project::TestProject;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn defaults_only_set_the_mode() {
        let layer = overrides(&BuildArgs::default(), &EngineConfig::new()).into_layer();
        assert_eq!(layer.to_value(), json!({ "mode": "production" }));
    }

    #[rstest]
    #[case(Sourcemap::True, json!(true))]
    #[case(Sourcemap::False, json!(false))]
    #[case(Sourcemap::Inline, json!("inline"))]
    #[case(Sourcemap::Hidden, json!("hidden"))]
    fn sourcemap_values(#[case] sourcemap: Sourcemap, #[case] expected: Value) {
        let args = BuildArgs {
            sourcemap: Some(sourcemap),
            ..BuildArgs::default()
        };
        let layer = overrides(&args, &EngineConfig::new()).into_layer();
        assert_eq!(layer.get(&["build", "sourcemap"]), Some(&expected));
    }

    #[rstest]
    #[case(Minifier::Esbuild, json!("esbuild"))]
    #[case(Minifier::Terser, json!("terser"))]
    #[case(Minifier::False, json!(false))]
    fn minify_values(#[case] minify: Minifier, #[case] expected: Value) {
        let args = BuildArgs {
            minify: Some(minify),
            ..BuildArgs::default()
        };
        let layer = overrides(&args, &EngineConfig::new()).into_layer();
        assert_eq!(layer.get(&["build", "minify"]), Some(&expected));
    }

    #[test]
    fn entry_keeps_the_resolved_rollup_options() {
        let mut resolved = EngineConfig::new();
        resolved.set(
            &["build", "rollupOptions"],
            json!({ "input": "src/index.html", "external": ["fsevents"] }),
        );
        let args = BuildArgs {
            entry: Some(PathBuf::from("src/admin.html")),
            ..BuildArgs::default()
        };

        let merged = merge_config(&resolved, &overrides(&args, &resolved).into_layer());

        assert_eq!(
            merged.get(&["build", "rollupOptions"]),
            Some(&json!({ "input": "src/admin.html", "external": ["fsevents"] }))
        );
    }

    #[test]
    fn flags_override_the_project_configuration() {
        let project = TestProject::new();
        project.write_config("boxels.config.toml", "[build]\noutDir = \"build\"\nminify = \"terser\"\n");
        let resolved = ConfigResolver::new(project.root()).resolve().unwrap();
        let args = BuildArgs {
            mode: BuildMode::Staging,
            out_dir: Some(PathBuf::from("out")),
            minify: Some(Minifier::False),
            empty_out_dir: true,
            ..BuildArgs::default()
        };

        let merged = merge_config(&resolved, &overrides(&args, &resolved).into_layer());

        assert_eq!(merged.get_str(&["mode"]), Some("staging"));
        assert_eq!(merged.out_dir(), Some("out"));
        assert_eq!(merged.get(&["build", "minify"]), Some(&json!(false)));
        assert_eq!(merged.get(&["build", "emptyOutDir"]), Some(&json!(true)));
        assert_eq!(merged.get(&["build", "cssCodeSplit"]), Some(&json!(true)));
    }

    #[test]
    fn missing_paths_are_listed_together() {
        let project = TestProject::new();
        let args = BuildArgs {
            root: Some(PathBuf::from("nowhere")),
            entry: Some(PathBuf::from("nowhere/index.html")),
            ..BuildArgs::default()
        };

        let error = validate(project.root(), &args).unwrap_err();

        match error {
            CliError::InvalidOptions { command, errors } => {
                assert_eq!(command, "build");
                let flags: Vec<_> = errors.iter().map(|e| e.flag.as_str()).collect();
                assert_eq!(flags, vec!["--root", "--entry"]);
            }
            other => panic!("Expected InvalidOptions, got {other:?}"),
        }
    }

    #[test]
    fn existing_paths_pass_validation() {
        let project = TestProject::new();
        project.create_dir("app");
        project.write_file("app/index.html", "<!doctype html>");
        project.create_dir("static");
        project.assert_file_exists("app/index.html");
        let args = BuildArgs {
            root: Some(PathBuf::from("app")),
            entry: Some(PathBuf::from("app/index.html")),
            public_dir: Some(PathBuf::from("static")),
            ..BuildArgs::default()
        };

        assert!(validate(project.root(), &args).is_ok());
    }

    #[tokio::test]
    async fn invalid_flags_abort_before_resolution() {
        let project = TestProject::new();
        project.write_config("boxels.config.json", "42");
        let cache = ConfigCache::new(ConfigResolver::new(project.root()));
        let args = BuildArgs {
            public_dir: Some(PathBuf::from("missing")),
            ..BuildArgs::default()
        };

        let error = run_build(&cache, &args).await.unwrap_err();

        assert!(matches!(error, CliError::InvalidOptions { .. }));
        assert!(cache.cached().await.is_none());
    }
}
