//! Horizontal bands by edge direction.
//!
//! Nodes that only feed others sit in the top band, nodes with both inputs
//! and outputs in the middle band and nodes that only consume in the bottom
//! band. Positions inside a band are random.

use std::ops::RangeInclusive;

use log::trace;
use rand::{Rng, rngs::StdRng};

use irscope_core::geometry::Point;

use crate::{
    layout::{
        LayoutMap,
        engines::{self, MARGIN_MAX, MARGIN_MIN},
    },
    structure::NodeGraph,
};

const OUTPUTS_ONLY: RangeInclusive<f32> = 0.05..=0.25;
const BOTH: RangeInclusive<f32> = 0.45..=0.65;
const INPUTS_ONLY: RangeInclusive<f32> = 0.75..=0.95;

/// Band placement; nodes without any edge are scattered over the whole
/// square.
pub struct Engine;

impl engines::Engine for Engine {
    fn calculate(&self, graph: &NodeGraph<'_>, rng: &mut StdRng) -> LayoutMap {
        let mut isolated = 0usize;

        let layout = graph
            .node_indices()
            .map(|index| {
                let has_inputs = graph.inputs(index).next().is_some();
                let has_outputs = graph.outputs(index).next().is_some();

                let band = match (has_inputs, has_outputs) {
                    (false, true) => Some(OUTPUTS_ONLY),
                    (true, true) => Some(BOTH),
                    (true, false) => Some(INPUTS_ONLY),
                    (false, false) => None,
                };

                let point = match band {
                    Some(band) => Point::new(
                        rng.random_range(MARGIN_MIN..=MARGIN_MAX),
                        rng.random_range(band),
                    ),
                    None => {
                        isolated += 1;
                        engines::scatter(rng)
                    }
                };
                (graph.node(index).id().to_string(), point)
            })
            .collect();

        trace!(isolated; "Placed nodes in bands");
        layout
    }
}
