//! Backends module - Filesystem operations
//!
//! Provides:
//! - scan: Tree traversal with walkdir and the conversion driver
//! - rewrite: Per-file read, convert and write-back

pub mod rewrite;
pub mod scan;
