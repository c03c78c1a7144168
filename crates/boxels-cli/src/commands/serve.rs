//! `box serve` - development server

use boxels_config::ConfigCache;

use super::{CommandOverrides, final_config, hand_off, parse_open};
use crate::cli::ServeArgs;
use crate::error::Result;

/// Build the override layer for `box serve`
pub fn overrides(args: &ServeArgs) -> CommandOverrides {
    let mut overrides = CommandOverrides::new();
    overrides
        .set_path(&["root"], args.root.as_deref())
        .set_path(&["publicDir"], args.public_dir.as_deref())
        .set(&["mode"], args.mode)
        .set(&["base"], args.base.as_deref())
        .set(&["server", "port"], args.port)
        .set(&["server", "open"], args.open.as_deref().map(parse_open));
    overrides
}

/// Run the serve command
pub async fn run_serve(cache: &ConfigCache, args: &ServeArgs) -> Result<()> {
    let config = final_config(cache, overrides(args)).await?;

    if let Some(port) = config.server_port() {
        tracing::debug!(port, "Development server port");
    }
    hand_off("serve", &config);
    Ok(())
}
