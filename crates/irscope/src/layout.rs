//! Normalized node positions.
//!
//! Every strategy maps each node id to a point in the unit square, ready to
//! be scaled to whatever surface draws the graph.
//!
//! # Strategies
//!
//! - [`LayoutMethod::Random`] - Uniform scatter inside a 5% margin
//! - [`LayoutMethod::Grid`] - Row-major square grid in node order
//! - [`LayoutMethod::Proto1`] - Horizontal bands by edge direction
//! - [`LayoutMethod::Proto2`] - One column per connected group, one row per
//!   depth

mod engines;

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use log::{debug, info};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use irscope_core::{geometry::Point, graph::Graph};

use crate::{error::IrscopeError, structure::NodeGraph};

/// Position of every node, keyed by node id in node order.
pub type LayoutMap = IndexMap<String, Point>;

/// Available layout strategies.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMethod {
    Random,
    Grid,
    #[serde(rename = "proto_1")]
    Proto1,
    /// Layered layout (default)
    #[default]
    #[serde(rename = "proto_2")]
    Proto2,
}

impl LayoutMethod {
    pub const ALL: [LayoutMethod; 4] = [Self::Random, Self::Grid, Self::Proto1, Self::Proto2];
}

impl FromStr for LayoutMethod {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "grid" => Ok(Self::Grid),
            "proto_1" => Ok(Self::Proto1),
            "proto_2" => Ok(Self::Proto2),
            _ => Err("Unsupported layout method"),
        }
    }
}

impl From<LayoutMethod> for &'static str {
    fn from(val: LayoutMethod) -> Self {
        match val {
            LayoutMethod::Random => "random",
            LayoutMethod::Grid => "grid",
            LayoutMethod::Proto1 => "proto_1",
            LayoutMethod::Proto2 => "proto_2",
        }
    }
}

impl fmt::Display for LayoutMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Compute the position of every node of `graph`.
///
/// # Errors
///
/// Returns [`IrscopeError::Layout`] if the strategy left a node without a
/// position or placed one outside the unit square.
pub fn compute(
    graph: &Graph,
    method: LayoutMethod,
    rng: &mut StdRng,
) -> Result<LayoutMap, IrscopeError> {
    info!(method:%, nodes = graph.len(); "Computing layout");

    let nodes = NodeGraph::from_graph(graph);
    let layout = engines::for_method(method).calculate(&nodes, rng);

    if let Some(node) = graph.nodes().iter().find(|node| !layout.contains_key(node.id())) {
        return Err(IrscopeError::Layout(format!(
            "{method} layout did not place node `{}`",
            node.id()
        )));
    }
    if let Some((id, point)) = layout.iter().find(|(_, point)| !point.is_normalized()) {
        return Err(IrscopeError::Layout(format!(
            "{method} layout placed node `{id}` outside the unit square at ({}, {})",
            point.x(),
            point.y()
        )));
    }

    debug!(positions = layout.len(); "Layout computed");
    Ok(layout)
}
