//! TOML report of a processed dump.

use std::io;

use serde::Serialize;

use irscope::{
    DumpFormat, IrscopeError, Processed, coloring::Coloring, graph::Graph, layout::LayoutMap,
    layout::LayoutMethod,
};

/// Everything the renderer consumes, in one document.
#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a str,
    format: DumpFormat,
    method: LayoutMethod,
    skipped_lines: usize,
    graph: &'a Graph,
    coloring: &'a Coloring,
    layout: &'a LayoutMap,
}

/// Render `processed` as a TOML document.
pub fn render(input: &str, processed: &Processed) -> Result<String, IrscopeError> {
    let report = Report {
        input,
        format: processed.dump().format(),
        method: processed.method(),
        skipped_lines: processed.dump().warnings().len(),
        graph: processed.graph(),
        coloring: processed.coloring(),
        layout: processed.layout(),
    };

    toml::to_string(&report)
        .map_err(|err| IrscopeError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
