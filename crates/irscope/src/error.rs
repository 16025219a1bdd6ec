//! Error types for irscope operations.
//!
//! This module provides the main error type [`IrscopeError`] which wraps
//! the failures that can occur while processing a dump.

use std::io;

use thiserror::Error;

use irscope_parser::error::ParseError;

/// The main error type for irscope operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the dump text next to the structured
/// diagnostics so that reports can point at the offending lines.
#[derive(Debug, Error)]
pub enum IrscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IrscopeError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
