//! In-place file rewriting
//!
//! Reads one candidate file as UTF-8, applies the currency rules and writes the
//! result back over the same path when anything changed.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::rules::currency::convert_content;

/// Failure while processing a single file
#[derive(Debug, Error)]
pub enum RewriteError {
    /// Open, read or UTF-8 decode failure
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Convert one file in place, returning whether it was rewritten
pub fn rewrite_file(path: &Path) -> Result<bool, RewriteError> {
    let content = fs::read_to_string(path).map_err(RewriteError::Read)?;

    let (converted, changed) = convert_content(&content);
    if !changed {
        return Ok(false);
    }

    fs::write(path, converted).map_err(RewriteError::Write)?;
    Ok(true)
}
