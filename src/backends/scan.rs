//! Tree scanning and conversion driver
//!
//! Uses walkdir for traversal. Directories whose path contains the excluded
//! name are pruned before descent, so nothing beneath them is read.

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::backends::rewrite::rewrite_file;
use crate::core::model::{ConversionReport, FileFailure};
use crate::core::paths::{has_candidate_suffix, is_excluded_dir, normalize_path};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};

/// Whether a walk entry may hold file content.
///
/// Anything that is not a directory qualifies, including dangling symlinks,
/// so a link that cannot be opened still reaches the rewriter and is reported.
/// Symlinks to directories are neither followed nor read.
fn is_file_entry(entry: &DirEntry) -> bool {
    !entry.file_type().is_dir() && !(entry.path_is_symlink() && entry.path().is_dir())
}

/// List candidate files under root, in walk order
pub fn candidate_files(root: &Path, verbose: bool) -> Vec<PathBuf> {
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if entry.file_type().is_dir() && is_excluded_dir(entry.path()) {
            if verbose {
                eprintln!("skip {}", normalize_path(entry.path()));
            }
            return false;
        }
        true
    });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("walk error: {}", e);
                }
                continue;
            }
        };

        if is_file_entry(&entry) && has_candidate_suffix(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files
}

/// Convert every candidate file under root.
///
/// Per-file errors never abort the run: each one is recorded in the report,
/// handed to `on_failure` as it happens, and counted as not modified.
pub fn convert_tree<F>(root: &Path, verbose: bool, mut on_failure: F) -> ConversionReport
where
    F: FnMut(&FileFailure),
{
    let mut report = ConversionReport::new(root);

    for path in candidate_files(root, verbose) {
        report.scanned += 1;
        match rewrite_file(&path) {
            Ok(true) => report.modified.push(path),
            Ok(false) => {}
            Err(e) => {
                let failure = FileFailure::new(path, e.to_string());
                on_failure(&failure);
                report.failed.push(failure);
            }
        }
    }

    report
}

/// Run the convert command
pub fn run_convert(root: &Path, verbose: bool, config: RenderConfig) -> Result<()> {
    let text_mode = config.format == OutputFormat::Text;

    let report = convert_tree(root, verbose, |failure| {
        if text_mode {
            println!(
                "Error processing {}: {}",
                normalize_path(&failure.path),
                failure.error
            );
        }
    });

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&report));

    Ok(())
}
