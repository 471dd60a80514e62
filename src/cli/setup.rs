//! `setup` command: turn the template into a project for a GitHub repository.
//!
//! Copies the template next to itself (or configures it in place), points
//! `config.toml` at the repository's Pages URL and prints the git commands
//! that publish it. Git itself is never run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::SetupArgs;
use crate::asset::write_atomic;
use crate::config::ProjectConfig;
use crate::setup::{
    ACCEPTED_URL_FORMATS, GithubRepo, copy_project, default_remote, destination_path, git_plan,
    inspect_repo, rewrite_config,
};
use crate::utils::path::normalize_path;
use crate::{debug, log};

pub fn setup_repository(config: &ProjectConfig, args: &SetupArgs) -> Result<()> {
    let Some(repo) = GithubRepo::parse(&args.repo_url) else {
        bail!(
            "invalid GitHub repository URL `{}`, expected one of:\n  {}",
            args.repo_url,
            ACCEPTED_URL_FORMATS.join("\n  ")
        );
    };
    let Some(config_path) = config.config_path.as_deref() else {
        bail!("no config file found, run setup from inside the template");
    };
    let Some(config_name) = config_path.file_name() else {
        bail!("invalid config path {}", config_path.display());
    };

    log!("setup"; "repository: {}", repo);
    if let Some(domain) = config.repository.domain.as_deref().filter(|d| !d.is_empty()) {
        log!("setup"; "custom domain `{}` will be cleared", domain);
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let template_root = normalize_path(config.get_root(), &cwd);
    let project_root = if args.in_place {
        template_root.clone()
    } else {
        destination_path(&template_root, &repo.name, args.dest.as_deref(), &cwd)
    };

    if args.dry {
        return print_dry_run(&repo, &template_root, &project_root, config_path);
    }

    if project_root != template_root {
        log!("setup"; "copying {} -> {}", template_root.display(), project_root.display());
        let count = copy_project(&template_root, &project_root, args.force)?;
        log!("setup"; "copied {} files", count);
    }

    update_config(&project_root.join(config_name), &repo.pages_url())?;
    print_next_steps(&repo, &project_root, project_root != cwd, args)
}

/// Show the destination and the rewritten config without touching anything
fn print_dry_run(
    repo: &GithubRepo,
    template_root: &Path,
    project_root: &Path,
    config_path: &Path,
) -> Result<()> {
    if project_root != template_root {
        log!("setup"; "would copy {} -> {}", template_root.display(), project_root.display());
        if project_root.exists() {
            log!("warning"; "{} already exists, --force would replace it", project_root.display());
        }
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    print!("{}", rewrite_config(&content, &repo.pages_url()).content);
    Ok(())
}

/// Point `base_url` at the Pages URL and clear `domain`
fn update_config(config_path: &Path, pages_url: &str) -> Result<()> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let rewrite = rewrite_config(&content, pages_url);
    if !rewrite.base_url_replaced {
        log!("warning"; "no base_url found in {}", config_path.display());
    }

    if rewrite.content == content {
        debug!("setup"; "{} already up to date", config_path.display());
    } else {
        write_atomic(config_path, &rewrite.content)?;
        log!("setup"; "updated {}", config_path.display());
    }
    Ok(())
}

fn print_next_steps(
    repo: &GithubRepo,
    project_root: &Path,
    change_dir: bool,
    args: &SetupArgs,
) -> Result<()> {
    let remote = args.remote.unwrap_or_else(default_remote);
    let state = inspect_repo(project_root);
    debug!("setup"; "git state: {:?}", state);

    log!("setup"; "create an empty repository at https://github.com/new named `{}`", repo.name);
    log!("setup"; "then run these commands to publish ({} remote):", remote);
    if change_dir {
        println!("  cd {}", quoted(project_root));
    }
    for command in git_plan(&state, repo, remote) {
        println!("  {command}");
    }

    log!("setup"; "enable GitHub Pages at {}/settings/pages", repo.web_url());
    log!("setup"; "assets will be served from {}", repo.pages_url());
    Ok(())
}

fn quoted(path: &Path) -> String {
    let path = path.display().to_string();
    if path.contains(char::is_whitespace) {
        format!("\"{path}\"")
    } else {
        path
    }
}
