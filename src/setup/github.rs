//! GitHub repository URLs.

use std::fmt;
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;

/// GitHub usernames: alphanumeric and inner hyphens, 1-39 characters
static USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,37}[a-zA-Z0-9])?$").expect("valid username regex")
});

/// Repository names: alphanumeric, `.`, `_`, `-`, 1-100 characters
static REPO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]{1,100}$").expect("valid repo name regex"));

/// Accepted URL shapes: https, ssh and scheme-less
static REPO_URL: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"^https?://github\.com/([^/]+)/([^/]+)$",
        r"^git@github\.com:([^/]+)/([^/]+)$",
        r"^github\.com/([^/]+)/([^/]+)$",
    ]
    .map(|pattern| Regex::new(pattern).expect("valid repo url regex"))
});

/// Accepted URL formats, for error messages
pub const ACCEPTED_URL_FORMATS: &[&str] = &[
    "https://github.com/username/repo-name",
    "https://github.com/username/repo-name.git",
    "git@github.com:username/repo-name.git",
    "github.com/username/repo-name",
];

pub fn validate_github_username(username: &str) -> bool {
    USERNAME.is_match(username)
}

pub fn validate_repo_name(name: &str) -> bool {
    REPO_NAME.is_match(name)
}

/// How the git remote connects to GitHub
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKind {
    Ssh,
    Https,
}

impl fmt::Display for RemoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ssh => "SSH",
            Self::Https => "HTTPS",
        })
    }
}

/// An `owner/name` GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRepo {
    pub owner: String,
    pub name: String,
}

impl GithubRepo {
    /// Parse a repository URL
    ///
    /// A trailing `.git` and trailing slashes are ignored. Returns `None` for
    /// other hosts or invalid owner/repository names.
    ///
    /// ```ignore
    /// GithubRepo::parse("git@github.com:octo/assets.git") -> Some(octo/assets)
    /// GithubRepo::parse("https://gitlab.com/octo/assets")  -> None
    /// ```
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        let url = url.strip_suffix(".git").unwrap_or(url);
        let url = url.trim_end_matches('/');

        REPO_URL.iter().find_map(|pattern| {
            let caps = pattern.captures(url)?;
            let (owner, name) = (&caps[1], &caps[2]);
            (validate_github_username(owner) && validate_repo_name(name)).then(|| Self {
                owner: owner.to_string(),
                name: name.to_string(),
            })
        })
    }

    /// Remote URL for `git remote add`
    pub fn remote_url(&self, kind: RemoteKind) -> String {
        match kind {
            RemoteKind::Ssh => format!("git@github.com:{}/{}.git", self.owner, self.name),
            RemoteKind::Https => format!("https://github.com/{}/{}.git", self.owner, self.name),
        }
    }

    /// GitHub Pages URL the assets are published under
    pub fn pages_url(&self) -> String {
        format!("https://{}.github.io/{}", self.owner, self.name)
    }

    /// Repository page on github.com
    pub fn web_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }

    /// Whether an existing remote URL points at this repository
    pub fn matches_remote(&self, remote: &str) -> bool {
        let remote = remote.trim().trim_end_matches('/');
        let remote = remote.strip_suffix(".git").unwrap_or(remote);
        let path = format!("{}/{}", self.owner, self.name);
        remote
            .strip_suffix(path.as_str())
            .is_some_and(|head| head.ends_with('/') || head.ends_with(':'))
    }
}

impl fmt::Display for GithubRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
