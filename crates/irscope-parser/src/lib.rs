//! # Irscope Parser
//!
//! Reads textual compiler IR graph dumps into an [`irscope_core::graph::Graph`].
//!
//! Two dialects are understood: node dumps, with one `id Type === ...`
//! record per line, and JIT logs, with two-line `#id Type @(...) -> [...];`
//! / `L[ ... ]` records. JIT logs are rewritten into node dump lines before
//! parsing.
//!
//! ## Usage
//!
//! ```
//! # use irscope_parser::{parse, DumpFormat, error::ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let source = "1 TypeA === [[]]\n2 TypeB === 1 [[]]";
//!
//!     let dump = parse(source)?;
//!     assert_eq!(dump.format(), DumpFormat::NodeDump);
//!     assert_eq!(dump.graph().nodes()[1].in_edges()[0].edge_type(), "TypeA");
//!     Ok(())
//! }
//! ```

pub mod error;
mod format;
mod jit;
mod parser;
mod resolve;
mod source;
mod span;
mod tokens;

pub use format::{DumpFormat, detect};
pub use jit::normalize_lines;
pub use resolve::resolve_edge_types;
pub use span::Span;

use irscope_core::graph::Graph;
use log::{debug, info};

use error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError};
use source::SourceLine;

/// A successfully parsed dump.
#[derive(Debug, Clone)]
pub struct ParsedDump {
    graph: Graph,
    format: DumpFormat,
    warnings: Vec<Diagnostic>,
}

impl ParsedDump {
    /// The parsed graph with resolved edge types.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The dialect the dump was read as.
    pub fn format(&self) -> DumpFormat {
        self.format
    }

    /// Lines that were skipped, in source order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

/// Parse dump text.
///
/// The pipeline is:
///
/// 1. **Detect** - Classify the dialect with [`detect`]
/// 2. **Normalize** - Merge JIT log records into node dump lines
/// 3. **Parse** - Read node dump records into nodes
/// 4. **Resolve** - Type every edge by its target node
///
/// Malformed lines are skipped and reported in [`ParsedDump::warnings`].
///
/// # Errors
///
/// Returns a [`ParseError`] with an `E300` error, followed by any warnings,
/// when no node could be read.
pub fn parse(source: &str) -> Result<ParsedDump, ParseError> {
    parse_source_lines(source::split_lines(source))
}

/// Parse dump text that was already split into lines.
///
/// Spans in diagnostics refer to the lines joined with `\n`.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<ParsedDump, ParseError> {
    parse_source_lines(source::from_lines(lines))
}

fn parse_source_lines(lines: Vec<SourceLine<'_>>) -> Result<ParsedDump, ParseError> {
    let format = detect(lines.iter().map(|line| line.text()));
    info!(format:%, lines = lines.len(); "Parsing dump");

    let mut collector = DiagnosticCollector::new();

    let lines = if format == DumpFormat::JitLog {
        jit::normalize(&lines, &mut collector)
    } else {
        lines
    };

    let graph = parser::build_graph(&lines, &mut collector);
    if graph.is_empty() {
        collector.emit(
            Diagnostic::error("no nodes found in dump")
                .with_code(ErrorCode::E300)
                .with_help("expected lines such as `12 AddI === 10 11 [[ 13 ]]`"),
        );
    }
    let warnings = collector.finish()?;

    let graph = resolve_edge_types(&graph);
    debug!(
        nodes = graph.len(),
        types = graph.node_types().len(),
        warnings = warnings.len();
        "Parsed dump"
    );

    Ok(ParsedDump {
        graph,
        format,
        warnings,
    })
}
