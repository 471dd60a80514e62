//! Copying the template into a new project folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::utils::path::normalize_path;

/// Entries left out of the copy
pub const SKIPPED_ENTRIES: &[&str] = &[".git"];

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("`{}` already exists, pass --force to replace it", .0.display())]
    Exists(PathBuf),

    #[error("destination `{}` is inside the template", .0.display())]
    Nested(PathBuf),

    #[error("IO error on `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),
}

/// Where the new project goes
///
/// Default: a sibling of the template named after the repository. An
/// explicit path may start with `~`; when it names an existing directory
/// the project is created inside it.
pub fn destination_path(
    template_root: &Path,
    repo_name: &str,
    requested: Option<&Path>,
    cwd: &Path,
) -> PathBuf {
    let Some(requested) = requested else {
        return template_root
            .parent()
            .unwrap_or(template_root)
            .join(repo_name);
    };

    let expanded = PathBuf::from(shellexpand::tilde(&requested.to_string_lossy()).as_ref());
    let path = normalize_path(&cwd.join(expanded), cwd);
    if path.is_dir() { path.join(repo_name) } else { path }
}

/// Copy `src` to `dest`, leaving out [`SKIPPED_ENTRIES`]
///
/// An existing `dest` is refused unless `overwrite` is set, in which case it
/// is removed first. Returns the number of files copied.
pub fn copy_project(src: &Path, dest: &Path, overwrite: bool) -> Result<usize, CopyError> {
    if dest.starts_with(src) {
        return Err(CopyError::Nested(dest.to_path_buf()));
    }

    if dest.exists() {
        if !overwrite {
            return Err(CopyError::Exists(dest.to_path_buf()));
        }
        if dest.is_dir() {
            fs::remove_dir_all(dest).map_err(io_err(dest))?;
        } else {
            fs::remove_file(dest).map_err(io_err(dest))?;
        }
    }

    let mut count = 0;
    copy_dir_recursive(src, dest, &mut count)?;
    Ok(count)
}

fn copy_dir_recursive(
    src_dir: &Path,
    dest_dir: &Path,
    count: &mut usize,
) -> Result<(), CopyError> {
    fs::create_dir_all(dest_dir).map_err(io_err(dest_dir))?;

    for entry in fs::read_dir(src_dir).map_err(io_err(src_dir))? {
        let entry = entry.map_err(io_err(src_dir))?;
        let file_name = entry.file_name();
        if SKIPPED_ENTRIES.iter().any(|skip| file_name == *skip) {
            continue;
        }

        let src_path = entry.path();
        let dest_path = dest_dir.join(&file_name);
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dest_path, count)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(io_err(&src_path))?;
            *count += 1;
        }
    }

    Ok(())
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> CopyError {
    let path = path.to_path_buf();
    move |err| CopyError::Io(path, err)
}
