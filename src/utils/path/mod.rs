//! Path and URL utilities.
//!
//! - [`fs`]: Filesystem path resolution (`normalize_path`, `resolve_path`)
//! - [`to_slash`]: platform-independent rendering of relative paths

pub mod fs;

pub use fs::{normalize_path, resolve_path};

use std::path::{Component, Path};

/// Render a relative path with forward slashes regardless of host separator
///
/// Only normal components are kept, so `./css/app.css` becomes `css/app.css`.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("css/app.min.css")), "css/app.min.css");
        assert_eq!(to_slash(Path::new("./a/b.png")), "a/b.png");
        assert_eq!(to_slash(Path::new("single.js")), "single.js");

        let built: PathBuf = ["photos", "2024", "a.webp"].iter().collect();
        assert_eq!(to_slash(&built), "photos/2024/a.webp");
    }
}
