//! Square grid placement in node order.

use rand::rngs::StdRng;

use irscope_core::geometry::Point;

use crate::{
    layout::{LayoutMap, engines},
    structure::NodeGraph,
};

/// Fills rows of `round(sqrt(n))` cells left to right, top to bottom.
///
/// Cells are `1 / max(columns, rows)` wide and high and numbered from 1, so
/// the last column and row touch the far edges of the unit square.
pub struct Engine;

impl Engine {
    fn columns(len: usize) -> usize {
        ((len as f64).sqrt().round() as usize).max(1)
    }
}

impl engines::Engine for Engine {
    fn calculate(&self, graph: &NodeGraph<'_>, _rng: &mut StdRng) -> LayoutMap {
        let columns = Self::columns(graph.len());
        let rows = graph.len().div_ceil(columns);
        let cells = columns.max(rows) as f32;

        graph
            .node_indices()
            .enumerate()
            .map(|(position, index)| {
                let row = position / columns + 1;
                let column = position % columns + 1;
                let point = Point::new(column as f32 / cells, row as f32 / cells);
                (graph.node(index).id().to_string(), point)
            })
            .collect()
    }
}
