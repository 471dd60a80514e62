//! Git command plan for publishing a freshly configured template.
//!
//! [`inspect_repo`] reads the repository state with `gix`; [`git_plan`] turns
//! that state into commands without touching anything.

use std::fmt;
use std::path::Path;

use super::{GithubRepo, RemoteKind};
use crate::debug;

/// Commit message of the first commit in a fresh copy
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from static-assets-template";

/// Branch GitHub Pages deploys from
pub const MAIN_BRANCH: &str = "main";

/// What is known about the project's git repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoState {
    /// A `.git` directory exists
    pub initialized: bool,
    /// URL of the `origin` remote, if configured
    pub origin: Option<String>,
    /// Short name of the checked-out branch
    pub branch: Option<String>,
}

/// Inspect the repository at `root`
///
/// Missing or unreadable repositories are reported as not initialized.
pub fn inspect_repo(root: &Path) -> RepoState {
    if !root.join(".git").exists() {
        return RepoState::default();
    }

    let repo = match gix::open(root) {
        Ok(repo) => repo,
        Err(e) => {
            debug!("git"; "cannot open repository: {}", e);
            return RepoState::default();
        }
    };

    let origin = repo
        .find_remote("origin")
        .ok()
        .and_then(|remote| {
            remote
                .url(gix::remote::Direction::Push)
                .map(|url| url.to_bstring().to_string())
        });
    let branch = repo
        .head_name()
        .ok()
        .flatten()
        .map(|name| name.shorten().to_string());

    RepoState {
        initialized: true,
        origin,
        branch,
    }
}

/// One `git` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    pub args: Vec<String>,
}

impl GitCommand {
    fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Commands that publish the project to `repo` on the main branch
///
/// - Fresh copy: init, add, commit, add origin
/// - Existing repository: add origin when missing, repoint it when it names
///   another repository, rename the branch when it is not `main`
///
/// Every plan ends with the push.
pub fn git_plan(state: &RepoState, repo: &GithubRepo, remote: RemoteKind) -> Vec<GitCommand> {
    let remote_url = repo.remote_url(remote);
    let mut plan = Vec::new();

    if state.initialized {
        match &state.origin {
            Some(origin) if repo.matches_remote(origin) => {}
            Some(_) => plan.push(GitCommand::new(["remote", "set-url", "origin", &remote_url])),
            None => plan.push(GitCommand::new(["remote", "add", "origin", &remote_url])),
        }
        if state.branch.as_deref().is_some_and(|b| b != MAIN_BRANCH) {
            plan.push(GitCommand::new(["branch", "-M", MAIN_BRANCH]));
        }
    } else {
        plan.push(GitCommand::new(["init", "-b", MAIN_BRANCH]));
        plan.push(GitCommand::new(["add", "."]));
        plan.push(GitCommand::new(["commit", "-m", INITIAL_COMMIT_MESSAGE]));
        plan.push(GitCommand::new(["remote", "add", "origin", &remote_url]));
    }

    plan.push(GitCommand::new(["push", "-u", "origin", MAIN_BRANCH]));
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo() -> GithubRepo {
        GithubRepo::parse("github.com/octo/assets").unwrap()
    }

    fn rendered(plan: &[GitCommand]) -> Vec<String> {
        plan.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_plan_fresh_copy() {
        let plan = git_plan(&RepoState::default(), &repo(), RemoteKind::Ssh);
        assert_eq!(
            rendered(&plan),
            vec![
                "git init -b main",
                "git add .",
                "git commit -m \"Initial commit from static-assets-template\"",
                "git remote add origin git@github.com:octo/assets.git",
                "git push -u origin main",
            ]
        );
    }

    #[test]
    fn test_plan_existing_repo_without_origin() {
        let state = RepoState {
            initialized: true,
            origin: None,
            branch: Some("main".into()),
        };
        let plan = git_plan(&state, &repo(), RemoteKind::Https);
        assert_eq!(
            rendered(&plan),
            vec![
                "git remote add origin https://github.com/octo/assets.git",
                "git push -u origin main",
            ]
        );
    }

    #[test]
    fn test_plan_existing_repo_other_origin_and_branch() {
        let state = RepoState {
            initialized: true,
            origin: Some("git@github.com:template/static-assets-template.git".into()),
            branch: Some("master".into()),
        };
        let plan = git_plan(&state, &repo(), RemoteKind::Ssh);
        assert_eq!(
            rendered(&plan),
            vec![
                "git remote set-url origin git@github.com:octo/assets.git",
                "git branch -M main",
                "git push -u origin main",
            ]
        );
    }

    #[test]
    fn test_plan_existing_repo_already_configured() {
        let state = RepoState {
            initialized: true,
            origin: Some("https://github.com/octo/assets.git".into()),
            branch: Some("main".into()),
        };
        let plan = git_plan(&state, &repo(), RemoteKind::Ssh);
        assert_eq!(rendered(&plan), vec!["git push -u origin main"]);
    }

    #[test]
    fn test_inspect_without_git_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(inspect_repo(dir.path()), RepoState::default());
    }

    #[test]
    fn test_inspect_initialized_repo() {
        let dir = TempDir::new().unwrap();
        gix::init(dir.path()).unwrap();

        let state = inspect_repo(dir.path());
        assert!(state.initialized);
        assert!(state.origin.is_none());
    }
}
