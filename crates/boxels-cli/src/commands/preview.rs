//! `box preview` - serve the production build

use std::path::Path;

use boxels_config::ConfigCache;

use super::{CommandOverrides, final_config, hand_off, require_existing};
use crate::cli::PreviewArgs;
use crate::error::{CliError, Result};

/// Check that the path flags name existing directories
pub fn validate(project: &Path, args: &PreviewArgs) -> Result<()> {
    let mut errors = Vec::new();
    require_existing(project, "--root", args.root.as_deref(), "directory does not exist", &mut errors);
    require_existing(
        project,
        "--public-dir",
        args.public_dir.as_deref(),
        "directory does not exist",
        &mut errors,
    );

    match CliError::invalid_options("preview", errors) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Build the override layer for `box preview`
pub fn overrides(args: &PreviewArgs) -> CommandOverrides {
    let mut overrides = CommandOverrides::new();
    overrides
        .set(&["base"], args.base.as_deref())
        .set(&["mode"], args.mode)
        .set_path(&["root"], args.root.as_deref())
        .set_path(&["publicDir"], args.public_dir.as_deref())
        .set(&["preview", "port"], args.port)
        .set(&["preview", "host"], args.host.as_deref())
        .set(&["preview", "open"], args.open.then_some(true));
    overrides
}

/// Run the preview command
pub async fn run_preview(cache: &ConfigCache, args: &PreviewArgs) -> Result<()> {
    validate(cache.resolver().root(), args)?;

    let config = final_config(cache, overrides(args)).await?;
    hand_off("preview", &config);
    Ok(())
}
