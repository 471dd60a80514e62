//! Filesystem path utilities.
//!
//! - `normalize_path` - absolute form of a path (canonicalize + fallback)
//! - `resolve_path` - resolve a user-supplied path against cwd or a fallback directory

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with `cwd` if relative
#[inline]
pub fn normalize_path(path: &Path, cwd: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        }
    })
}

/// Resolve a path that may be relative to cwd or a fallback directory.
///
/// Tries in order:
/// 1. If absolute, use as-is
/// 2. If exists relative to `cwd`, normalize to absolute
/// 3. Otherwise, resolve relative to `fallback_dir`
///
/// # Example
/// ```ignore
/// // User passes "src/images/logo.png" from a nested directory,
/// // fallback is the project root
/// let resolved = resolve_path(Path::new("src/images/logo.png"), &cwd, root);
/// ```
#[inline]
pub fn resolve_path(path: &Path, cwd: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    let from_cwd = cwd.join(path);
    if from_cwd.exists() {
        return normalize_path(&from_cwd, cwd);
    }

    normalize_path(&fallback_dir.join(path), cwd)
}
