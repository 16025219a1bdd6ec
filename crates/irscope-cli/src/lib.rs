//! Irscope CLI library
//!
//! Reads one dump, runs it through the [`GraphBuilder`] pipeline and writes
//! the TOML report.

pub mod error_adapter;

mod args;
mod config;
mod report;

pub use args::Args;

use std::fs;

use log::{info, warn};

use irscope::{GraphBuilder, IrscopeError};

/// Process the dump named by `args` and write its report.
///
/// # Errors
///
/// Returns `IrscopeError` for:
/// - An unreadable dump or report path
/// - A settings file that cannot be read or holds unknown settings
/// - A dump without a single readable node
/// - A node the layout could not place
pub fn run(args: &Args) -> Result<(), IrscopeError> {
    let settings = config::resolve(args)?;
    info!(
        input_path = args.input,
        method:% = settings.app.layout.method;
        "Reading dump"
    );

    let source = fs::read_to_string(&args.input)?;

    let mut builder = GraphBuilder::new(settings.app);
    let processed = builder.process(&source)?;

    let skipped = processed.dump().warnings().len();
    if skipped > 0 {
        warn!(skipped; "Some lines could not be read and were skipped");
    }

    let report = report::render(&args.input, &processed)?;
    fs::write(&settings.output, report)?;

    info!(
        output_path:? = settings.output,
        nodes = processed.graph().len();
        "Report written"
    );

    Ok(())
}
