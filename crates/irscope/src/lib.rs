//! Irscope - Inspect compiler IR graph dumps
//!
//! This library reads textual IR graph dumps (node dumps and JIT logs),
//! assigns distinct colors to nodes and node types, and computes normalized
//! positions for drawing the graph.

pub mod coloring;
pub mod config;
pub mod layout;

mod error;
mod structure;

pub use irscope_core::{color, geometry, graph};
pub use irscope_parser::{DumpFormat, ParsedDump};

pub use error::IrscopeError;

use log::{debug, info, trace};
use rand::{SeedableRng, rngs::StdRng};

use coloring::Coloring;
use config::AppConfig;
use graph::Graph;
use layout::{LayoutMap, LayoutMethod};

/// Builder for parsing, coloring and laying out IR graph dumps.
///
/// # Examples
///
/// ```rust
/// use irscope::{GraphBuilder, config::AppConfig, layout::LayoutMethod};
///
/// let source = "1 Start === [[ 2 ]]\n2 Return === 1 [[]]";
///
/// let config = AppConfig::default().with_seed(42);
/// let mut builder = GraphBuilder::new(config);
///
/// let dump = builder.parse(source).expect("Failed to parse");
/// let coloring = builder.colorize(dump.graph());
/// let layout = builder
///     .layout_with(dump.graph(), LayoutMethod::Grid)
///     .expect("Failed to lay out");
///
/// assert_eq!(coloring.node_colors().len(), 2);
/// assert_eq!(layout.len(), 2);
/// ```
///
/// Coloring and layout draw from one generator owned by the builder, seeded
/// from `layout.seed` when it is set. Two builders with the same seed give
/// the same results whether the steps are called one by one or through
/// [`GraphBuilder::process`].
#[derive(Debug)]
pub struct GraphBuilder {
    config: AppConfig,
    rng: StdRng,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let rng = match config.layout.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse dump text into a graph with resolved edge types.
    ///
    /// # Errors
    ///
    /// Returns `IrscopeError::Parse` if no node could be read.
    pub fn parse(&self, source: &str) -> Result<ParsedDump, IrscopeError> {
        info!("Parsing dump");
        let dump = irscope_parser::parse(source)
            .map_err(|err| IrscopeError::new_parse_error(err, source))?;
        debug!(
            format:% = dump.format(),
            nodes = dump.graph().len(),
            skipped = dump.warnings().len();
            "Dump parsed"
        );
        trace!(graph:? = dump.graph(); "Parsed graph");
        Ok(dump)
    }

    /// Assign color pairs to every node and node type.
    pub fn colorize(&mut self, graph: &Graph) -> Coloring {
        coloring::assign(graph, &mut self.rng)
    }

    /// Lay out `graph` with the configured method.
    ///
    /// # Errors
    ///
    /// Returns `IrscopeError::Layout` if a node could not be placed.
    pub fn layout(&mut self, graph: &Graph) -> Result<LayoutMap, IrscopeError> {
        self.layout_with(graph, self.config.layout.method)
    }

    /// Lay out `graph` with an explicit method.
    ///
    /// # Errors
    ///
    /// Returns `IrscopeError::Layout` if a node could not be placed.
    pub fn layout_with(
        &mut self,
        graph: &Graph,
        method: LayoutMethod,
    ) -> Result<LayoutMap, IrscopeError> {
        layout::compute(graph, method, &mut self.rng)
    }

    /// Run the whole pipeline: parse, color and lay out with the configured
    /// method. Equivalent to calling [`parse`](Self::parse),
    /// [`colorize`](Self::colorize) and [`layout`](Self::layout) in turn.
    ///
    /// # Errors
    ///
    /// Returns `IrscopeError` if parsing or layout fails.
    pub fn process(&mut self, source: &str) -> Result<Processed, IrscopeError> {
        let dump = self.parse(source)?;

        let coloring = self.colorize(dump.graph());
        let method = self.config.layout.method;
        let layout = self.layout_with(dump.graph(), method)?;

        info!(method:%, nodes = dump.graph().len(); "Dump processed");

        Ok(Processed {
            dump,
            coloring,
            method,
            layout,
        })
    }
}

/// Everything a renderer needs to draw one dump.
#[derive(Debug, Clone)]
pub struct Processed {
    dump: ParsedDump,
    coloring: Coloring,
    method: LayoutMethod,
    layout: LayoutMap,
}

impl Processed {
    pub fn dump(&self) -> &ParsedDump {
        &self.dump
    }

    pub fn graph(&self) -> &Graph {
        self.dump.graph()
    }

    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// The method the layout was computed with.
    pub fn method(&self) -> LayoutMethod {
        self.method
    }

    pub fn layout(&self) -> &LayoutMap {
        &self.layout
    }
}
