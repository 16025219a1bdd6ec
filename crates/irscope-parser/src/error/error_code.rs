//! Error codes for irscope diagnostics.
//!
//! Error codes are organized by phase:
//! - `E0xx` - JIT log normalization
//! - `E1xx` - Node dump records
//! - `E3xx` - Whole-graph checks

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // JIT Log Errors (E0xx)
    // =========================================================================
    /// Header without an output arrow.
    ///
    /// A `#id Type @(...)` header line has no `->` token.
    E001,

    /// Unterminated output list.
    ///
    /// The `[ ... ` output list of a header is not closed with `];`.
    E002,

    /// Header without inputs.
    ///
    /// A header line was not followed by an `L[ ... ]` input line.
    E003,

    /// Unterminated input list.
    ///
    /// An `L[` input line has no lone `]` token.
    E004,

    // =========================================================================
    // Node Dump Errors (E1xx)
    // =========================================================================
    /// Missing `===` separator after the node type.
    E100,

    /// Input list runs to the end of the line without `[[` or `(`.
    E101,

    /// Special input list opened with `(` but never closed.
    E102,

    /// Output list is missing.
    E103,

    /// A node with this id was already read.
    E104,

    // =========================================================================
    // Graph Errors (E3xx)
    // =========================================================================
    /// No node could be read from the dump.
    E300,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E300 => "E300",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "header missing `->`",
            ErrorCode::E002 => "unterminated output list",
            ErrorCode::E003 => "header without input line",
            ErrorCode::E004 => "unterminated input list",
            ErrorCode::E100 => "missing `===`",
            ErrorCode::E101 => "unterminated input list",
            ErrorCode::E102 => "unterminated special input list",
            ErrorCode::E103 => "missing output list",
            ErrorCode::E104 => "duplicate node id",
            ErrorCode::E300 => "no nodes",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
