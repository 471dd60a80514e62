//! assetkit - markdown link lists and helpers for static-asset templates.

mod asset;
mod cli;
mod config;
mod core;
mod image;
mod logger;
mod setup;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ProjectConfig::load(&cli)?;

    match &cli.command {
        Commands::Links { args } => cli::links::generate_links(&config, args),
        Commands::Resize { args } => cli::resize::run_resize(&config, args),
        Commands::Setup { args } => cli::setup::setup_repository(&config, args),
    }
}
