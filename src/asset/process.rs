//! Per-type processing: scan, transform, render, write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tempfile::NamedTempFile;

use super::{AssetError, FilePair, FileTypeSpec, GeneratedLink, ScanMode, scan_pairs};
use crate::debug;
use crate::utils::path::to_slash;

/// Outcome of processing one file type
///
/// The scan result is kept even when the markdown file could not be written.
#[derive(Debug)]
pub struct ProcessOutcome {
    /// Number of files found
    pub count: usize,
    /// First rendered link, if any
    pub first_link: Option<String>,
    /// Published paths claimed by more than one source file
    pub collisions: Vec<PathBuf>,
    /// Path of the written markdown file, or why writing it failed
    pub written: Result<PathBuf, AssetError>,
}

impl ProcessOutcome {
    /// Whether any files were found
    pub const fn found(&self) -> bool {
        self.count > 0
    }

    /// Whether the markdown file was written
    pub const fn is_written(&self) -> bool {
        self.written.is_ok()
    }
}

/// Process one file type and write its markdown file into `output_dir`
///
/// The file is written even when nothing was found, so stale links from an
/// earlier run never survive. `output_dir` must already exist.
pub fn process_file_type(
    project_root: &Path,
    spec: &FileTypeSpec,
    mode: ScanMode,
    base_url: &str,
    output_dir: &Path,
) -> ProcessOutcome {
    let pairs = scan_pairs(project_root, spec, mode);
    if mode == ScanMode::Source {
        for pair in &pairs {
            debug!(spec.tag; "{} -> {}", to_slash(&pair.original), to_slash(&pair.final_path));
        }
    }
    let links: Vec<_> = pairs
        .iter()
        .map(|pair| GeneratedLink::new(pair, spec.url_path, base_url).to_string())
        .collect();

    let document = render_document(spec, mode, &links);
    let output = output_dir.join(spec.output_file);
    let written = write_atomic(&output, &document).map(|()| output);

    ProcessOutcome {
        count: pairs.len(),
        first_link: links.into_iter().next(),
        collisions: find_collisions(&pairs),
        written,
    }
}

/// Render the markdown document for one file type
pub fn render_document(spec: &FileTypeSpec, mode: ScanMode, links: &[String]) -> String {
    let mut doc = format!("# {}\n\n", spec.description);

    let dir = spec.scan_dir(mode);
    match mode {
        ScanMode::Source => {
            doc.push_str(&format!("Generated from source files in `{dir}/`\n"));
            doc.push_str("These URLs are predicted based on build transformations.\n\n");
        }
        ScanMode::Built => {
            doc.push_str(&format!("Generated from built files in `{dir}/`\n"));
            doc.push_str("These are the actual URLs available after build.\n\n");
        }
    }

    if links.is_empty() {
        doc.push_str("No files found for this type.\n\n");
    } else {
        doc.push_str("Copy and paste these links into your markdown files:\n\n");
        for link in links {
            doc.push_str(link);
            doc.push_str("\n\n");
        }
    }

    doc
}

/// Published paths that more than one source maps to, in first-seen order
fn find_collisions(pairs: &[FilePair]) -> Vec<PathBuf> {
    let mut seen: FxHashMap<&Path, usize> = FxHashMap::default();
    let mut collisions = Vec::new();

    for pair in pairs {
        let count = seen.entry(pair.final_path.as_path()).or_default();
        *count += 1;
        if *count == 2 {
            collisions.push(pair.final_path.clone());
        }
    }

    collisions
}

/// Write `content` to `path` via a temporary file in the same directory
///
/// Readers see either the previous file or the complete new one.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), AssetError> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let write_err = |err: std::io::Error| AssetError::Write(path.to_path_buf(), err);

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;

    // NamedTempFile is created 0600; give the artifact regular permissions
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("links");
        fs::create_dir_all(&out).unwrap();
        (dir, out)
    }

    #[test]
    fn test_source_mode_document() {
        let (dir, out) = setup();
        touch(dir.path(), "src/css/app.css");
        touch(dir.path(), "src/css/themes/dark.css");

        let css = FileTypeSpec::find("css").unwrap();
        let outcome =
            process_file_type(dir.path(), css, ScanMode::Source, "https://x.test", &out);

        assert_eq!(outcome.count, 2);
        assert!(outcome.found());
        let written = outcome.written.as_ref().unwrap();
        assert_eq!(written, &out.join("css.md"));
        assert_eq!(
            fs::read_to_string(written).unwrap(),
            "# CSS File Links\n\n\
             Generated from source files in `src/css/`\n\
             These URLs are predicted based on build transformations.\n\n\
             Copy and paste these links into your markdown files:\n\n\
             [app](https://x.test/css/app.min.css)\n\n\
             [themes-dark](https://x.test/css/themes/dark.min.css)\n\n"
        );
        assert_eq!(
            outcome.first_link.as_deref(),
            Some("[app](https://x.test/css/app.min.css)")
        );
    }

    #[test]
    fn test_built_mode_document() {
        let (dir, out) = setup();
        touch(dir.path(), "dist/images/photos/a.webp");
        touch(dir.path(), "src/images/photos/a.png");

        let webp = FileTypeSpec::find("webp").unwrap();
        let outcome =
            process_file_type(dir.path(), webp, ScanMode::Built, "https://x.test", &out);

        assert_eq!(outcome.count, 1);
        let doc = fs::read_to_string(outcome.written.unwrap()).unwrap();
        assert!(doc.starts_with("# WebP Image Links\n\nGenerated from built files in `dist/images/`\n"));
        assert!(doc.contains("These are the actual URLs available after build.\n\n"));
        assert!(doc.contains("[photos-a](https://x.test/images/photos/a.webp)\n\n"));
    }

    #[test]
    fn test_empty_type_writes_no_files_line() {
        let (dir, out) = setup();

        for spec in crate::asset::FILE_TYPES {
            let outcome =
                process_file_type(dir.path(), spec, ScanMode::Source, "https://x.test", &out);
            assert_eq!(outcome.count, 0);
            assert!(!outcome.found());
            assert!(outcome.first_link.is_none());

            let doc = fs::read_to_string(outcome.written.unwrap()).unwrap();
            assert!(doc.ends_with("No files found for this type.\n\n"));
            assert!(!doc.contains("]("));
        }
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let (dir, out) = setup();
        touch(dir.path(), "src/data/b.json");
        touch(dir.path(), "src/data/a.csv");
        touch(dir.path(), "src/data/nested/c.xml");

        let data = FileTypeSpec::find("data").unwrap();
        let first = process_file_type(dir.path(), data, ScanMode::Source, "https://x.test", &out)
            .written
            .unwrap();
        let before = fs::read(&first).unwrap();

        let second = process_file_type(dir.path(), data, ScanMode::Source, "https://x.test", &out)
            .written
            .unwrap();
        assert_eq!(second, first);
        assert_eq!(fs::read(&first).unwrap(), before);
    }

    #[test]
    fn test_collisions_are_reported() {
        let (dir, out) = setup();
        touch(dir.path(), "src/images/a.png");
        touch(dir.path(), "src/images/a.jpg");
        touch(dir.path(), "src/images/b.png");

        let webp = FileTypeSpec::find("webp").unwrap();
        let outcome =
            process_file_type(dir.path(), webp, ScanMode::Source, "https://x.test", &out);

        // Both sources are kept in the output
        assert_eq!(outcome.count, 3);
        assert_eq!(outcome.collisions, vec![PathBuf::from("a.webp")]);
    }

    #[test]
    fn test_failed_write_keeps_scan_result() {
        let (dir, out) = setup();
        touch(dir.path(), "src/js/app.js");
        fs::create_dir_all(out.join("js.md")).unwrap();

        let js = FileTypeSpec::find("js").unwrap();
        let outcome = process_file_type(dir.path(), js, ScanMode::Source, "https://x.test", &out);

        assert_eq!(outcome.count, 1);
        assert!(outcome.found());
        assert!(!outcome.is_written());
        assert_eq!(
            outcome.first_link.as_deref(),
            Some("[app](https://x.test/js/app.min.js)")
        );
    }

    #[test]
    fn test_write_atomic_leaves_only_target() {
        let (_dir, out) = setup();
        let target = out.join("md.md");
        write_atomic(&target, "first").unwrap();
        write_atomic(&target, "second").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
        let entries: Vec<_> = fs::read_dir(&out).unwrap().flatten().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing/js.md");
        let err = write_atomic(&target, "x").unwrap_err();
        assert!(matches!(err, AssetError::Write(path, _) if path == target));
    }
}
