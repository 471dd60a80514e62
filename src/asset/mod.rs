//! Asset link generation.
//!
//! ```text
//! FILE_TYPES ─▶ scan ─▶ transform ─▶ link ─▶ process (write) ─▶ run (summary)
//! ```
//!
//! Each file type is processed independently; nothing is shared between
//! types except the read-only registry.

mod kind;
mod link;
mod process;
mod run;
mod scan;
mod transform;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// Types
pub use kind::{FILE_TYPES, FileTypeSpec};
pub use link::GeneratedLink;
pub use transform::{MIN_MARKER, Transform};

// Scanning (pure functions)
pub use scan::{find_files, scan_pairs};

// Processing (side effects)
pub use process::{ProcessOutcome, process_file_type, write_atomic};
pub use run::{RunOptions, run_all};

/// Which tree is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Scan sources and predict published paths through the type's transform
    #[default]
    Source,
    /// Scan the build output and report the paths found
    Built,
}

impl ScanMode {
    pub const fn from_dist(dist: bool) -> Self {
        if dist { Self::Built } else { Self::Source }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "src/ (predict URLs)",
            Self::Built => "dist/ (actual files)",
        })
    }
}

/// A scanned file and the path it is published under
///
/// Both paths are relative to the scanned directory. In [`ScanMode::Built`]
/// they are always equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub original: PathBuf,
    pub final_path: PathBuf,
}

/// Errors while writing generated link files
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot create output directory `{}`", .0.display())]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("cannot write `{}`", .0.display())]
    Write(PathBuf, #[source] std::io::Error),
}
