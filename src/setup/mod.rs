//! Pointing a fresh template copy at its GitHub repository.
//!
//! ```text
//! setup/
//! ├── github     # URL parsing, remote and Pages URLs
//! ├── copy       # template copy into the new project folder
//! ├── config     # textual config.toml rewrite
//! ├── git        # repository state and command plan
//! └── mod.rs     # SSH key detection (this file)
//! ```

mod config;
mod copy;
mod git;
mod github;

pub use config::rewrite_config;
pub use copy::{copy_project, destination_path};
pub use git::{git_plan, inspect_repo};
pub use github::{ACCEPTED_URL_FORMATS, GithubRepo, RemoteKind};

use std::path::{Path, PathBuf};

/// Private key names `ssh` tries by default
const SSH_KEY_NAMES: &[&str] = &["id_rsa", "id_ed25519", "id_ecdsa", "id_dsa"];

/// Whether `~/.ssh` holds one of the default key pairs
pub fn has_ssh_keys() -> bool {
    let dir = PathBuf::from(shellexpand::tilde("~/.ssh").as_ref());
    has_ssh_keys_in(&dir)
}

/// Whether `dir` holds a default private key or its `.pub` half
pub fn has_ssh_keys_in(dir: &Path) -> bool {
    SSH_KEY_NAMES.iter().any(|name| {
        dir.join(name).is_file() || dir.join(format!("{name}.pub")).is_file()
    })
}

/// Remote kind to use when none was requested
pub fn default_remote() -> RemoteKind {
    if has_ssh_keys() {
        RemoteKind::Ssh
    } else {
        RemoteKind::Https
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_ssh_keys_detected() {
        let dir = TempDir::new().unwrap();
        assert!(!has_ssh_keys_in(dir.path()));

        fs::write(dir.path().join("known_hosts"), "").unwrap();
        assert!(!has_ssh_keys_in(dir.path()));

        fs::write(dir.path().join("id_ed25519.pub"), "ssh-ed25519 AAAA").unwrap();
        assert!(has_ssh_keys_in(dir.path()));
    }

    #[test]
    fn test_ssh_keys_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(!has_ssh_keys_in(&dir.path().join("nope")));
    }
}
