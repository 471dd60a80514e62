//! File type registry.
//!
//! One [`FileTypeSpec`] per asset category. Adding a category is a one-entry
//! change to [`FILE_TYPES`]; the order of the table is the reporting order.

use super::{ScanMode, Transform};

/// Scan, transform and output rules for one asset category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeSpec {
    /// Unique key (e.g. `webp`)
    pub tag: &'static str,
    /// Suffixes searched in the source directory (lowercase, with leading dot)
    pub extensions: &'static [&'static str],
    /// Suffixes searched in the build output, when they differ from `extensions`
    pub built_extensions: Option<&'static [&'static str]>,
    /// Source directory, relative to the project root
    pub source_dir: &'static str,
    /// Build output directory, relative to the project root
    pub built_dir: &'static str,
    /// URL segment between the base URL and the file path
    pub url_path: &'static str,
    /// Predicts the built path of a source file
    pub transform: Transform,
    /// Name of the generated markdown file
    pub output_file: &'static str,
    /// Title of the generated markdown file
    pub description: &'static str,
}

impl FileTypeSpec {
    /// Directory scanned in the given mode
    pub const fn scan_dir(&self, mode: ScanMode) -> &'static str {
        match mode {
            ScanMode::Source => self.source_dir,
            ScanMode::Built => self.built_dir,
        }
    }

    /// Suffixes matched in the given mode
    pub fn scan_extensions(&self, mode: ScanMode) -> &'static [&'static str] {
        match mode {
            ScanMode::Source => self.extensions,
            ScanMode::Built => self.built_extensions.unwrap_or(self.extensions),
        }
    }

    /// Look up a registered type by tag
    #[cfg(test)]
    pub fn find(tag: &str) -> Option<&'static FileTypeSpec> {
        FILE_TYPES.iter().find(|spec| spec.tag == tag)
    }
}

/// Registered asset categories, in reporting order.
pub const FILE_TYPES: &[FileTypeSpec] = &[
    FileTypeSpec {
        tag: "webp",
        extensions: &[".png", ".jpg", ".jpeg", ".webp"],
        // The build converts PNG/JPG/JPEG, so only .webp exists in dist/
        built_extensions: Some(&[".webp"]),
        source_dir: "src/images",
        built_dir: "dist/images",
        url_path: "images",
        transform: Transform::Extension("webp"),
        output_file: "webp.md",
        description: "WebP Image Links",
    },
    FileTypeSpec {
        tag: "svg",
        extensions: &[".svg"],
        built_extensions: None,
        source_dir: "src/images",
        built_dir: "dist/images",
        url_path: "images",
        transform: Transform::Identity,
        output_file: "svg.md",
        description: "SVG Image Links",
    },
    FileTypeSpec {
        tag: "gif",
        extensions: &[".gif"],
        built_extensions: None,
        source_dir: "src/images",
        built_dir: "dist/images",
        url_path: "images",
        transform: Transform::Identity,
        output_file: "gif.md",
        description: "GIF Image Links",
    },
    FileTypeSpec {
        tag: "css",
        extensions: &[".css"],
        built_extensions: Some(&[".min.css"]),
        source_dir: "src/css",
        built_dir: "dist/css",
        url_path: "css",
        transform: Transform::Minified("css"),
        output_file: "css.md",
        description: "CSS File Links",
    },
    FileTypeSpec {
        tag: "js",
        extensions: &[".js"],
        built_extensions: Some(&[".min.js"]),
        source_dir: "src/js",
        built_dir: "dist/js",
        url_path: "js",
        transform: Transform::Minified("js"),
        output_file: "js.md",
        description: "JavaScript File Links",
    },
    FileTypeSpec {
        tag: "data",
        extensions: &[".csv", ".json", ".txt", ".xml"],
        built_extensions: None,
        source_dir: "src/data",
        built_dir: "dist/data",
        url_path: "data",
        transform: Transform::Identity,
        output_file: "data.md",
        description: "Data File Links",
    },
    FileTypeSpec {
        tag: "md",
        extensions: &[".md"],
        built_extensions: None,
        source_dir: "src/md",
        built_dir: "dist/md",
        url_path: "md",
        transform: Transform::Identity,
        output_file: "md.md",
        description: "Markdown File Links",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_tags_are_unique() {
        let tags: FxHashSet<_> = FILE_TYPES.iter().map(|spec| spec.tag).collect();
        assert_eq!(tags.len(), FILE_TYPES.len());
    }

    #[test]
    fn test_output_files_are_unique() {
        let outputs: FxHashSet<_> = FILE_TYPES.iter().map(|spec| spec.output_file).collect();
        assert_eq!(outputs.len(), FILE_TYPES.len());
    }

    #[test]
    fn test_extensions_are_lowercase_suffixes() {
        for spec in FILE_TYPES {
            let built = spec.built_extensions.unwrap_or_default();
            for ext in spec.extensions.iter().chain(built) {
                assert!(ext.starts_with('.'), "{}: {ext}", spec.tag);
                assert_eq!(*ext, ext.to_ascii_lowercase(), "{}: {ext}", spec.tag);
            }
        }
    }

    #[test]
    fn test_scan_extensions_per_mode() {
        let css = FileTypeSpec::find("css").unwrap();
        assert_eq!(css.scan_extensions(ScanMode::Source), &[".css"]);
        assert_eq!(css.scan_extensions(ScanMode::Built), &[".min.css"]);
        assert_eq!(css.scan_dir(ScanMode::Built), "dist/css");

        // No distinct built extensions: fall back to the source set
        let data = FileTypeSpec::find("data").unwrap();
        assert_eq!(
            data.scan_extensions(ScanMode::Built),
            data.scan_extensions(ScanMode::Source)
        );
    }

    #[test]
    fn test_find_unknown_tag() {
        assert!(FileTypeSpec::find("mp4").is_none());
    }
}
