//! Command-line interface definitions.

use crate::setup::RemoteKind;
use clap::{ArgGroup, ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Asset link generator and helpers for static-asset templates
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "config.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate markdown files listing asset URLs, one per file type
    #[command(visible_alias = "l")]
    Links {
        #[command(flatten)]
        args: LinksArgs,
    },

    /// Resize an image proportionally, or list the project's images
    #[command(visible_alias = "r")]
    Resize {
        #[command(flatten)]
        args: ResizeArgs,
    },

    /// Point this template at a GitHub repository
    #[command(visible_alias = "s")]
    Setup {
        #[command(flatten)]
        args: SetupArgs,
    },
}

/// Links command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LinksArgs {
    /// Scan the build output (dist/) for actual URLs instead of predicting from src/
    #[arg(long)]
    pub dist: bool,

    /// Base URL for generated links (default: `[repository] base_url` from config.toml)
    #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Directory to write the markdown files to (default: links/ in the project root)
    #[arg(short, long = "output-dir", value_hint = clap::ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,
}

/// Resize command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
#[command(group(ArgGroup::new("target").args(["scale", "width", "height"]).multiple(false)))]
pub struct ResizeArgs {
    /// Image to resize. If omitted, lists supported images in the project.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub image: Option<PathBuf>,

    /// Scale factor (e.g., 0.5 for 50%, 2.0 for 200%)
    #[arg(short, long)]
    pub scale: Option<f64>,

    /// Target width in pixels (keeps aspect ratio)
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Target height in pixels (keeps aspect ratio)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Output file name, placed next to the input (default: <stem>_resized.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,
}

/// Setup command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SetupArgs {
    /// GitHub repository URL (https, ssh, or bare github.com/owner/repo)
    #[arg(value_name = "REPO_URL")]
    pub repo_url: String,

    /// Remote protocol (default: ssh when an SSH key is present, else https)
    #[arg(long, value_enum)]
    pub remote: Option<RemoteKind>,

    /// Folder for the new project (default: ../<repo-name> next to the template)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// Configure this folder instead of copying the template
    #[arg(long, conflicts_with_all = ["dest", "force"])]
    pub in_place: bool,

    /// Replace the destination folder if it exists
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be done without copying or writing anything
    #[arg(long)]
    pub dry: bool,
}
