//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Conversion report model (ConversionReport)
//! - Rendering functions for the text and json output formats
//! - Path normalization and candidate filtering

pub mod model;
pub mod paths;
pub mod render;
