//! Directory scanning (pure, no side effects).

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use super::{FilePair, FileTypeSpec, ScanMode};
use crate::debug;

/// Find files under `root` whose name ends with one of `extensions`
///
/// Returns paths relative to `base`, sorted by relative path. Suffixes are
/// compared case-insensitively against the whole file name, so compound
/// suffixes like `.min.css` match as well as `.css`.
///
/// A missing `root` yields an empty list. Unreadable entries and files that
/// are not under `base` are skipped.
///
/// # Pure Function
///
/// This function only reads the filesystem and returns data
pub fn find_files(root: &Path, extensions: &[&str], base: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        return vec![];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("scan"; "skipping unreadable entry: {}", e);
                None
            }
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, extensions))
        .filter_map(|path| path.strip_prefix(base).ok().map(Path::to_path_buf))
        .filter(|rel| !rel.as_os_str().is_empty())
        .collect();

    files.sort();
    files
}

/// Check whether the file name ends with one of the (lowercase) suffixes
fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    extensions
        .iter()
        .any(|ext| name.len() > ext.len() && name.ends_with(ext))
}

/// Scan one file type and pair each file with its published path
///
/// - [`ScanMode::Source`]: scans the source dir and predicts the built path
///   through the type's transform
/// - [`ScanMode::Built`]: scans the build output; the path found is the
///   published path
pub fn scan_pairs(project_root: &Path, spec: &FileTypeSpec, mode: ScanMode) -> Vec<FilePair> {
    let dir = project_root.join(spec.scan_dir(mode));
    let files = find_files(&dir, spec.scan_extensions(mode), &dir);

    files
        .into_iter()
        .map(|original| {
            let final_path = match mode {
                ScanMode::Source => spec.transform.apply(&original),
                ScanMode::Built => original.clone(),
            };
            FilePair {
                original,
                final_path,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_find_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(find_files(&missing, &[".png"], &missing).is_empty());
    }

    #[test]
    fn test_find_sorted_relative_paths() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.png");
        touch(dir.path(), "a.png");
        touch(dir.path(), "c/z.png");

        let files = find_files(dir.path(), &[".png"], dir.path());
        assert_eq!(
            files,
            vec![
                PathBuf::from("a.png"),
                PathBuf::from("b.png"),
                PathBuf::from("c/z.png"),
            ]
        );
    }

    #[test]
    fn test_find_case_insensitive_and_filtered() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.PNG");
        touch(dir.path(), "b.Jpg");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "deep/er/c.jpeg");

        let files = find_files(dir.path(), &[".png", ".jpg", ".jpeg"], dir.path());
        assert_eq!(
            files,
            vec![
                PathBuf::from("a.PNG"),
                PathBuf::from("b.Jpg"),
                PathBuf::from("deep/er/c.jpeg"),
            ]
        );
    }

    #[test]
    fn test_find_compound_suffix() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "app.min.css");
        touch(dir.path(), "app.css");

        let files = find_files(dir.path(), &[".min.css"], dir.path());
        assert_eq!(files, vec![PathBuf::from("app.min.css")]);
    }

    #[test]
    fn test_find_includes_hidden_dirs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".well-known/security.txt");

        let files = find_files(dir.path(), &[".txt"], dir.path());
        assert_eq!(files, vec![PathBuf::from(".well-known/security.txt")]);
    }

    #[test]
    fn test_find_relative_to_outer_base() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/images/a.svg");

        let root = dir.path().join("src/images");
        let files = find_files(&root, &[".svg"], dir.path());
        assert_eq!(files, vec![PathBuf::from("src/images/a.svg")]);
    }

    #[test]
    fn test_find_skips_files_outside_base() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        touch(dir.path(), "a.svg");

        assert!(find_files(dir.path(), &[".svg"], other.path()).is_empty());
    }

    #[test]
    fn test_scan_pairs_source_mode_transforms() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/images/photos/a.JPG");
        touch(dir.path(), "src/images/logo.svg");

        let webp = FileTypeSpec::find("webp").unwrap();
        let pairs = scan_pairs(dir.path(), webp, ScanMode::Source);
        assert_eq!(
            pairs,
            vec![FilePair {
                original: PathBuf::from("photos/a.JPG"),
                final_path: PathBuf::from("photos/a.webp"),
            }]
        );
    }

    #[test]
    fn test_scan_pairs_built_mode_is_identity() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "dist/js/app.min.js");
        touch(dir.path(), "dist/js/vendor.js");

        let js = FileTypeSpec::find("js").unwrap();
        let pairs = scan_pairs(dir.path(), js, ScanMode::Built);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].original, PathBuf::from("app.min.js"));
        assert_eq!(pairs[0].final_path, pairs[0].original);
    }
}
