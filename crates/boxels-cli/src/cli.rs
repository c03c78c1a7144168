//! CLI argument parsing using clap derive

use std::path::PathBuf;

use boxels_config::Mode;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

/// Boxels - Build, serve and preview Boxels applications
#[derive(Parser, Debug)]
#[command(name = "box")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory to resolve the configuration from
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Compile the application for production deployment
    ///
    /// Examples:
    ///   box build                         # Build with the project configuration
    ///   box build --out-dir out --minify terser
    ///   box build --mode staging --sourcemap hidden
    Build(BuildArgs),

    /// Start the development server with hot module replacement
    Serve(ServeArgs),

    /// Serve the production build locally
    Preview(PreviewArgs),

    /// Show the resolved project configuration
    Config {
        /// Output the raw configuration as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options of `box build`
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Public base path of the generated assets (e.g. /assets/)
    #[arg(long)]
    pub base: Option<String>,

    /// Build mode
    #[arg(long, value_enum, default_value_t = BuildMode::Production)]
    pub mode: BuildMode,

    /// Project root directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Entry file or directory
    #[arg(long)]
    pub entry: Option<PathBuf>,

    /// Directory of static files to include
    #[arg(long)]
    pub public_dir: Option<PathBuf>,

    /// Output directory of the build
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Sourcemap generation
    #[arg(long, value_enum)]
    pub sourcemap: Option<Sourcemap>,

    /// Minifier to use
    #[arg(long, value_enum)]
    pub minify: Option<Minifier>,

    /// Empty the output directory before building
    #[arg(long)]
    pub empty_out_dir: bool,
}

/// Options of `box serve`
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Port of the development server (e.g. 3000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Public base path (e.g. /subpath/)
    #[arg(long)]
    pub base: Option<String>,

    /// Environment mode
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Project root directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Open the browser on start (true, false or a browser name)
    #[arg(long)]
    pub open: Option<String>,

    /// Directory of static files
    #[arg(long)]
    pub public_dir: Option<PathBuf>,
}

/// Options of `box preview`
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewArgs {
    /// Port of the preview server (e.g. 5000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host or IP address to bind the preview server to
    #[arg(long)]
    pub host: Option<String>,

    /// Open the browser on start
    #[arg(long)]
    pub open: bool,

    /// Public base path
    #[arg(long)]
    pub base: Option<String>,

    /// Environment mode
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Project root directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory of static files
    #[arg(long)]
    pub public_dir: Option<PathBuf>,
}

/// Modes accepted by `box build`
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Production,
    Staging,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sourcemap {
    True,
    False,
    Inline,
    Hidden,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Minifier {
    Esbuild,
    Terser,
    False,
}
