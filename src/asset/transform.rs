//! Path transforms predicting the built form of a source path.
//!
//! Transforms are pure: they only rewrite the relative path and never touch
//! the filesystem.

use std::path::{Path, PathBuf};

/// Marker the build inserts before the extension of minified files
pub const MIN_MARKER: &str = "min";

/// Per-type rewrite of a relative source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Published unchanged (SVG, GIF, data, markdown)
    Identity,
    /// Extension replaced by a fixed one: `photos/a.JPG` -> `photos/a.webp`
    Extension(&'static str),
    /// Stem kept, `.min.<ext>` appended: `app.css` -> `app.min.css`
    Minified(&'static str),
}

impl Transform {
    /// Apply the transform to a relative path
    pub fn apply(&self, path: &Path) -> PathBuf {
        match self {
            Self::Identity => path.to_path_buf(),
            Self::Extension(ext) => path.with_extension(ext),
            Self::Minified(ext) => {
                let stem = path.file_stem().unwrap_or_default().to_string_lossy();
                path.with_file_name(format!("{stem}.{MIN_MARKER}.{ext}"))
            }
        }
    }
}
