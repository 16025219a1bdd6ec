//! Layered placement of connected groups.
//!
//! Every connected group of nodes gets a vertical strip of the square. Inside
//! a strip, a node's row is its depth: the length of the longest chain of
//! inputs leading to it.

use std::collections::BTreeMap;

use log::debug;
use petgraph::graph::NodeIndex;
use rand::rngs::StdRng;

use irscope_core::geometry::Point;

use crate::{
    layout::{
        LayoutMap,
        engines::{self, MARGIN_MIN},
    },
    structure::NodeGraph,
};

/// Width and height shared out between strips and rows.
const SPAN: f32 = 0.9;

pub struct Engine;

impl engines::Engine for Engine {
    fn calculate(&self, graph: &NodeGraph<'_>, rng: &mut StdRng) -> LayoutMap {
        // Fallback positions, replaced below for every node that is reached.
        let mut layout: LayoutMap = graph
            .node_indices()
            .map(|index| (graph.node(index).id().to_string(), engines::scatter(rng)))
            .collect();

        let groups = graph.groups();
        let strip_width = SPAN / groups.len().max(1) as f32;

        for (strip, group) in groups.iter().enumerate() {
            let left = MARGIN_MIN + strip_width * strip as f32;
            for (index, point) in place_group(graph, group, left, strip_width) {
                layout.insert(graph.node(index).id().to_string(), point);
            }
        }

        debug!(groups = groups.len(); "Placed connected groups");
        layout
    }
}

/// Rows by depth, with the nodes of a row spread evenly across the strip in
/// group order.
fn place_group(
    graph: &NodeGraph<'_>,
    group: &[NodeIndex],
    left: f32,
    width: f32,
) -> Vec<(NodeIndex, Point)> {
    let depths = graph.depths(group);

    let mut rows: BTreeMap<usize, Vec<NodeIndex>> = BTreeMap::new();
    for &index in group {
        let depth = depths.get(&index).copied().unwrap_or_default();
        rows.entry(depth).or_default().push(index);
    }

    let row_count = rows.keys().next_back().map_or(1, |deepest| deepest + 1);
    let row_height = SPAN / row_count as f32;

    rows.into_iter()
        .flat_map(|(depth, members)| {
            let spacing = width / members.len() as f32;
            let y = MARGIN_MIN + row_height * depth as f32;
            members
                .into_iter()
                .enumerate()
                .map(move |(slot, index)| (index, Point::new(left + spacing * slot as f32, y)))
        })
        .collect()
}
