//! `links` command: write one markdown link list per file type.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::LinksArgs;
use crate::asset::{FILE_TYPES, RunOptions, ScanMode, run_all};
use crate::config::{BaseUrlSource, ProjectConfig};
use crate::core::RunGuard;
use crate::utils::path::normalize_path;
use crate::{debug, log};

/// Default output directory, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = "links";

/// Generate link files for every registered file type
///
/// Per-type failures are reported and do not change the exit status; only
/// an output directory that cannot be created fails the command.
pub fn generate_links(config: &ProjectConfig, args: &LinksArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let mode = ScanMode::from_dist(args.dist);
    let base_url = config.resolve_base_url(args.base_url.as_deref());
    let output_dir = output_dir(config, args.output_dir.as_deref(), &cwd);

    if base_url.source == BaseUrlSource::Default {
        log!("warning"; "no base_url configured, using {}", base_url.as_str());
    }
    if !base_url.is_valid() {
        log!("warning"; "base URL `{}` is not an absolute URL", base_url.as_str());
    }

    log!("links"; "scanning {}", mode);
    log!("links"; "base URL: {} (from {})", base_url.as_str(), base_url.source);
    debug!("links"; "project root: {}", config.get_root().display());

    let summary = {
        let _guard = RunGuard::enter();
        run_all(
            FILE_TYPES,
            RunOptions {
                project_root: config.get_root(),
                mode,
                base_url: base_url.as_str(),
                output_dir: &output_dir,
            },
        )?
    };

    summary.print(&output_dir);
    Ok(())
}

/// `-o` resolved against the cwd, else `links/` under the project root
fn output_dir(config: &ProjectConfig, requested: Option<&Path>, cwd: &Path) -> PathBuf {
    match requested {
        Some(dir) => normalize_path(dir, cwd),
        None => config.root_join(DEFAULT_OUTPUT_DIR),
    }
}
