//! Markdown link rendering.

use std::fmt;
use std::path::Path;

use super::{FilePair, MIN_MARKER};
use crate::utils::path::to_slash;

/// A rendered `[label](url)` link for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLink {
    pub label: String,
    pub url: String,
}

impl GeneratedLink {
    /// Build the link for a file pair under a URL sub-path and base URL
    pub fn new(pair: &FilePair, url_path: &str, base_url: &str) -> Self {
        Self {
            label: derive_label(&pair.final_path),
            url: join_url(base_url, url_path, &pair.final_path),
        }
    }
}

impl fmt::Display for GeneratedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.label, self.url)
    }
}

/// Join base URL, URL sub-path and a relative file path with `/`
///
/// Trailing slashes on the base and surrounding slashes on the sub-path are
/// trimmed; an empty sub-path is left out.
///
/// ```ignore
/// join_url("https://x.test/", "css", Path::new("app.min.css"))
///     -> "https://x.test/css/app.min.css"
/// ```
pub fn join_url(base_url: &str, url_path: &str, final_path: &Path) -> String {
    let base = base_url.trim_end_matches('/');
    let sub = url_path.trim_matches('/');
    let file = to_slash(final_path);

    if sub.is_empty() {
        format!("{base}/{file}")
    } else {
        format!("{base}/{sub}/{file}")
    }
}

/// Derive a link label from a published path
///
/// Path separators (`/` and `\`) become `-`, then the full extension is
/// stripped: the last extension plus a preceding `.min` build marker.
///
/// ```ignore
/// derive_label(Path::new("css/app.min.css")) -> "css-app"
/// derive_label(Path::new("photos/a.webp"))   -> "photos-a"
/// ```
pub fn derive_label(final_path: &Path) -> String {
    let raw = final_path.to_string_lossy();
    let (dir, name) = match raw.rfind(['/', '\\']) {
        Some(pos) => (&raw[..pos], &raw[pos + 1..]),
        None => ("", &raw[..]),
    };

    let stem = strip_extension(name);
    if dir.is_empty() {
        stem.to_string()
    } else {
        format!("{}-{}", dir.replace(['/', '\\'], "-"), stem)
    }
}

/// Strip the last extension and a `.min` marker before it
///
/// Dotfiles keep their leading dot: `.env` stays `.env`.
fn strip_extension(name: &str) -> &str {
    let Some(stem) = name.rfind('.').filter(|&pos| pos > 0).map(|pos| &name[..pos]) else {
        return name;
    };
    stem.strip_suffix(MIN_MARKER)
        .and_then(|s| s.strip_suffix('.'))
        .filter(|s| !s.is_empty())
        .unwrap_or(stem)
}
