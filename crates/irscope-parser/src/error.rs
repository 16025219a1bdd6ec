//! Diagnostics reported while reading IR graph dumps.
//!
//! Malformed lines never stop a parse: each skipped line is reported as a
//! warning [`Diagnostic`] and kept on the parse result. A dump that yields no
//! nodes at all fails with a [`ParseError`] carrying an `E300` error followed
//! by the warnings that explain which lines were dropped.
//!
//! # Example
//!
//! ```
//! # use irscope_parser::error::{Diagnostic, ErrorCode};
//! # use irscope_parser::Span;
//! let diag = Diagnostic::warning("expected `===` after node type")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(0..24), "line skipped")
//!     .with_help("node dump lines look like `12 AddI === 10 11 [[ 13 ]]`");
//!
//! assert_eq!(diag.to_string(), "warning[E100]: expected `===` after node type");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
