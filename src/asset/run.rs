//! Run coordination across all registered file types.

use std::fs;
use std::path::Path;

use super::{AssetError, FileTypeSpec, ProcessOutcome, ScanMode, process_file_type};
use crate::core::is_shutdown;
use crate::logger::status_line;
use crate::utils::{path::to_slash, plural_count};
use crate::log;

/// Inputs shared by every file type of a run
#[derive(Debug, Clone, Copy)]
pub struct RunOptions<'a> {
    pub project_root: &'a Path,
    pub mode: ScanMode,
    pub base_url: &'a str,
    pub output_dir: &'a Path,
}

/// Result of one file type within a run
#[derive(Debug)]
pub struct TypeReport {
    pub spec: &'static FileTypeSpec,
    pub outcome: ProcessOutcome,
}

impl TypeReport {
    /// Files found, whether or not the markdown file was written
    pub const fn count(&self) -> usize {
        self.outcome.count
    }

    pub const fn is_ok(&self) -> bool {
        self.outcome.is_written()
    }
}

/// Aggregated results of a run, in registry order
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<TypeReport>,
    /// Ctrl+C stopped the run before every type was processed
    pub interrupted: bool,
}

impl RunSummary {
    /// Tag -> file count for every processed type
    #[cfg(test)]
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        self.reports
            .iter()
            .map(|report| (report.spec.tag, report.count()))
            .collect()
    }

    /// Total files over all types
    pub fn total(&self) -> usize {
        self.reports.iter().map(TypeReport::count).sum()
    }

    /// Number of types whose markdown file could not be written
    pub fn failures(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_ok()).count()
    }

    /// First link of the first written type that found files
    pub fn first_link(&self) -> Option<&str> {
        self.reports
            .iter()
            .filter(|report| report.is_ok())
            .find_map(|report| report.outcome.first_link.as_deref())
    }

    /// Print the summary table, total and an example link
    pub fn print(&self, output_dir: &Path) {
        log!("links"; "summary");
        for report in &self.reports {
            let count = report.count();
            if count == 0 {
                continue;
            }
            let target = match &report.outcome.written {
                Ok(path) => path.display().to_string(),
                Err(_) => "not written".to_string(),
            };
            println!("  {:10}: {:4} files -> {}", report.spec.tag, count, target);
        }

        log!("links"; "total files processed: {}", self.total());
        log!("links"; "output directory: {}", output_dir.display());
        let failures = self.failures();
        if failures > 0 {
            log!("warning"; "{} could not be written", plural_count(failures, "link file"));
        }

        if let Some(link) = self.first_link() {
            log!("links"; "example: {}", link);
        }
        if self.interrupted {
            log!("warning"; "run was interrupted, remaining file types were skipped");
        }
    }
}

/// Process every file type in `types`, in order
///
/// The output directory is created first; failing to create it aborts the
/// run. After that, each type is isolated: an empty or failed type is
/// reported and the next one is processed. Ctrl+C stops the run between
/// types.
pub fn run_all(
    types: &'static [FileTypeSpec],
    options: RunOptions<'_>,
) -> Result<RunSummary, AssetError> {
    run_until(types, options, is_shutdown)
}

/// [`run_all`] with the stop check supplied by the caller
///
/// `should_stop` is consulted before each type, so a type that has started
/// always finishes writing its markdown file.
fn run_until(
    types: &'static [FileTypeSpec],
    options: RunOptions<'_>,
    mut should_stop: impl FnMut() -> bool,
) -> Result<RunSummary, AssetError> {
    fs::create_dir_all(options.output_dir)
        .map_err(|err| AssetError::CreateDir(options.output_dir.to_path_buf(), err))?;

    let mut summary = RunSummary::default();
    for spec in types {
        if should_stop() {
            summary.interrupted = true;
            break;
        }

        let outcome = process_file_type(
            options.project_root,
            spec,
            options.mode,
            options.base_url,
            options.output_dir,
        );
        report_type(spec, options.mode, &outcome);
        summary.reports.push(TypeReport { spec, outcome });
    }

    Ok(summary)
}

/// Print the status line of one processed type
fn report_type(spec: &FileTypeSpec, mode: ScanMode, outcome: &ProcessOutcome) {
    let found = plural_count(outcome.count, "file");
    match &outcome.written {
        Ok(_) if outcome.found() => {
            status_line(spec.tag, true, &format!("found {} -> {}", found, spec.output_file));
        }
        Ok(_) => status_line(spec.tag, false, "no files found"),
        Err(e) => {
            let cause = std::error::Error::source(e)
                .map(|source| format!(": {source}"))
                .unwrap_or_default();
            status_line(spec.tag, false, &format!("found {found}, failed: {e}{cause}"));
        }
    }

    if mode == ScanMode::Source {
        for path in &outcome.collisions {
            log!("warning"; "several {} sources publish to {}", spec.tag, to_slash(path));
        }
    }
}
