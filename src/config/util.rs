//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Check that a base URL is an absolute URL with a host
///
/// Uses `url` crate for proper parsing, so `https://cdn.test:8080/assets`
/// passes while `cdn.test/assets` (no scheme) does not
///
/// # Examples
/// ```ignore
/// is_absolute_url("https://user.github.io/repo") -> true
/// is_absolute_url("http://localhost:8000")       -> true
/// is_absolute_url("user.github.io/repo")         -> false
/// ```
pub fn is_absolute_url(url_str: &str) -> bool {
    url::Url::parse(url_str).is_ok_and(|url| url.has_host())
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
///
/// # Example
/// ```text
/// /home/user/assets/src/images/  ← start
/// /home/user/assets/config.toml  ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // Absolute config path short-circuits the search
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://octo.github.io/assets"));
        assert!(is_absolute_url("https://cdn.test:8080/path"));
        assert!(is_absolute_url("http://localhost"));

        // Missing scheme
        assert!(!is_absolute_url("octo.github.io/assets"));
        // Scheme without host
        assert!(!is_absolute_url("mailto:someone@example.com"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_find_config_walks_upward() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        let nested = dir.path().join("src/images/icons");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested, Path::new("config.toml")).unwrap();
        assert_eq!(found, dir.path().join("config.toml"));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config.toml")).unwrap();

        let found = find_config_file_from(dir.path(), Path::new("config.toml"));
        assert_ne!(found, Some(dir.path().join("config.toml")));
    }

    #[test]
    fn test_find_config_absolute_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file_from(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
