//! Command-line argument definitions for the irscope CLI.
//!
//! Flags given here win over the settings file; see the `config` module for
//! how the two are combined.

use clap::Parser;

use irscope::layout::LayoutMethod;

/// Command-line arguments for the irscope dump inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input dump
    #[arg(help = "Path to the node dump or JIT log")]
    pub input: String,

    /// Path to the output TOML report [default: report.toml]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Settings file to use instead of the irscope.toml lookup
    #[arg(short, long)]
    pub config: Option<String>,

    /// Layout method (random, grid, proto_1, proto_2)
    #[arg(short, long)]
    pub layout: Option<LayoutMethod>,

    /// Seed for colors and layout, for reproducible reports
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
