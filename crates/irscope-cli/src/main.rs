use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use irscope::IrscopeError;
use irscope_cli::{Args, error_adapter::to_reportables};

/// Exit status for a dump without a single readable node.
const EXIT_UNREADABLE_DUMP: i32 = 2;
/// Exit status for a settings file that cannot be used.
const EXIT_BAD_SETTINGS: i32 = 3;

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "irscope: unknown log level `{}`, logging warnings only",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    match irscope_cli::run(&args) {
        Ok(()) => info!(input = args.input; "Dump inspected"),
        Err(err) => {
            report_failure(&args.input, &err);
            process::exit(exit_status(&err));
        }
    }
}

/// Print every diagnostic behind `err`: for a dump with no nodes that is
/// the `E300` error followed by one warning per skipped line.
fn report_failure(input: &str, err: &IrscopeError) {
    let handler = GraphicalReportHandler::new();
    let reportables = to_reportables(err);

    error!(input, diagnostics = reportables.len(); "Could not inspect dump");
    for reportable in &reportables {
        let mut rendered = String::new();
        if handler.render_report(&mut rendered, reportable).is_err() {
            rendered = format!("{reportable}\n");
        }
        eprint!("{rendered}");
    }
}

fn exit_status(err: &IrscopeError) -> i32 {
    match err {
        IrscopeError::Parse { .. } => EXIT_UNREADABLE_DUMP,
        IrscopeError::Config(_) => EXIT_BAD_SETTINGS,
        IrscopeError::Io(_) | IrscopeError::Layout(_) => 1,
    }
}
