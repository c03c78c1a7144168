//! Resolved configuration display

use boxels_config::{ConfigCache, ResolvedConfig};
use colored::Colorize;
use serde_json::Value;

use crate::error::Result;

/// Display the resolved project configuration
pub async fn run_config(cache: &ConfigCache, json: bool) -> Result<()> {
    let config = cache.get_or_resolve().await?;

    if json {
        println!("{}", config.to_json_pretty());
        return Ok(());
    }

    let source = cache
        .resolver()
        .locate()
        .map(|located| format!("{} ({})", located.file_name, located.format.name()))
        .unwrap_or_else(|| "(built-in defaults)".to_string());

    println!("{}", "Boxels Configuration".bold());
    println!();
    println!("  {:<14} {}", "Source:".dimmed(), source);
    println!();

    for (label, value) in summary(&config) {
        println!("  {:<14} {}", format!("{label}:").dimmed(), value);
    }
    println!();

    let plugins = plugin_names(&config);
    if plugins.is_empty() {
        println!("  {:<14} {}", "Plugins:".dimmed(), "(none)".dimmed());
    } else {
        println!("  {}:", "Plugins".dimmed());
        for name in plugins {
            println!("    {} {}", "+".green(), name);
        }
    }

    Ok(())
}

fn summary(config: &ResolvedConfig) -> Vec<(&'static str, String)> {
    let display = |path: &[&str]| match config.get(path) {
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
        None => "(unset)".to_string(),
    };

    vec![
        ("Root", display(&["root"])),
        ("Public dir", display(&["publicDir"])),
        ("Out dir", display(&["build", "outDir"])),
        ("Entry", display(&["build", "rollupOptions", "input"])),
        ("Server port", display(&["server", "port"])),
        ("Preview port", display(&["preview", "port"])),
    ]
}

fn plugin_names(config: &ResolvedConfig) -> Vec<String> {
    let Some(Value::Array(plugins)) = config.get(&["plugins"]) else {
        return Vec::new();
    };

    plugins
        .iter()
        .map(|plugin| match plugin.get("name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => plugin.to_string(),
        })
        .collect()
}
