//! Conversion report model
//!
//! A conversion run produces one ConversionReport. Traversal only appends to
//! it; rendering is left to the caller.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::paths::{make_relative, normalize_path};

/// A candidate file that could not be read or written
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

impl FileFailure {
    pub fn new(path: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            error: error.into(),
        }
    }
}

/// Outcome of converting one directory tree
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Directory the walk started from
    pub root: PathBuf,

    /// Number of candidate files handed to the rewriter
    pub scanned: usize,

    /// Rewritten files, in traversal order
    pub modified: Vec<PathBuf>,

    /// Files skipped because of an I/O or decoding error
    pub failed: Vec<FileFailure>,
}

impl ConversionReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            scanned: 0,
            modified: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }

    /// True when no file was rewritten
    pub fn is_empty(&self) -> bool {
        self.modified.is_empty()
    }

    /// Path as shown in machine-readable output
    fn relative(&self, path: &Path) -> String {
        make_relative(path, &self.root)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| normalize_path(path))
    }

    /// Serializable view with paths relative to the root
    pub fn to_summary(&self) -> ReportSummary {
        ReportSummary {
            root: normalize_path(&self.root),
            scanned: self.scanned,
            modified: self.modified.iter().map(|p| self.relative(p)).collect(),
            failed: self
                .failed
                .iter()
                .map(|f| FailureSummary {
                    path: self.relative(&f.path),
                    error: f.error.clone(),
                })
                .collect(),
        }
    }
}

/// JSON shape of a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureSummary {
    pub path: String,
    pub error: String,
}

/// JSON shape of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub root: String,
    pub scanned: usize,
    pub modified: Vec<String>,
    pub failed: Vec<FailureSummary>,
}
