//! Color assignment for nodes and node types.
//!
//! Every node and every node type gets its own [`ColorPair`]. The reserved
//! type labels (`null`, `unknown`, `na`) are always drawn with the neutral
//! white/black pair so that dangling edges stand out from real ones.

use indexmap::IndexMap;
use log::debug;
use rand::Rng;
use serde::Serialize;

use irscope_core::{
    color::{self, ColorPair},
    graph::{Graph, RESERVED_TYPES},
};

/// Colors keyed by node id and by node type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Coloring {
    node_colors: IndexMap<String, ColorPair>,
    type_colors: IndexMap<String, ColorPair>,
}

impl Coloring {
    /// Color pairs per node id, in parse order.
    pub fn node_colors(&self) -> &IndexMap<String, ColorPair> {
        &self.node_colors
    }

    /// Color pairs per type label, reserved labels last.
    pub fn type_colors(&self) -> &IndexMap<String, ColorPair> {
        &self.type_colors
    }

    pub fn node_color(&self, id: &str) -> Option<ColorPair> {
        self.node_colors.get(id).copied()
    }

    pub fn type_color(&self, node_type: &str) -> Option<ColorPair> {
        self.type_colors.get(node_type).copied()
    }

    /// The color of the node `id`, or the neutral pair for ids with no node,
    /// such as `_` edges.
    pub fn node_color_or_neutral(&self, id: &str) -> ColorPair {
        self.node_color(id).unwrap_or_else(ColorPair::neutral)
    }
}

/// Assign colors to every node and node type of `graph`.
///
/// Node colors follow node order. Type colors are generated for the
/// distinct node types followed by the reserved labels, which are then
/// reset to [`ColorPair::neutral`].
pub fn assign<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Coloring {
    let node_colors: IndexMap<_, _> = graph
        .nodes()
        .iter()
        .map(|node| node.id().to_string())
        .zip(color::generate(graph.len(), rng))
        .collect();

    let labels: Vec<&str> = graph
        .node_types()
        .iter()
        .map(String::as_str)
        .chain(RESERVED_TYPES)
        .collect();
    let mut type_colors: IndexMap<_, _> = labels
        .iter()
        .map(|label| label.to_string())
        .zip(color::generate(labels.len(), rng))
        .collect();

    for reserved in RESERVED_TYPES {
        type_colors.insert(reserved.to_string(), ColorPair::neutral());
    }

    debug!(
        nodes = node_colors.len(),
        types = type_colors.len();
        "Assigned colors"
    );

    Coloring {
        node_colors,
        type_colors,
    }
}

#[cfg(test)]
mod tests {
    use irscope_core::{
        color::Rgb,
        graph::{NA_TYPE, NULL_TYPE, Node, UNKNOWN_TYPE},
    };
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn graph(types: &[&str]) -> Graph {
        Graph::from_nodes(
            types
                .iter()
                .enumerate()
                .map(|(index, node_type)| Node::new(index.to_string(), *node_type))
                .collect(),
        )
    }

    #[test]
    fn test_one_color_per_node_and_type() {
        let mut rng = StdRng::seed_from_u64(7);
        let coloring = assign(&graph(&["Start", "Con", "Con"]), &mut rng);

        assert_eq!(coloring.node_colors().len(), 3);
        let types: Vec<_> = coloring.type_colors().keys().map(String::as_str).collect();
        assert_eq!(types, vec!["Start", "Con", NULL_TYPE, UNKNOWN_TYPE, NA_TYPE]);
    }

    #[test]
    fn test_type_colors_are_evenly_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        let coloring = assign(&graph(&["A", "B"]), &mut rng);

        // Five labels, so the hue step is 90 degrees.
        assert_eq!(
            coloring.type_color("A").map(|pair| pair.color()),
            Some(Rgb::from_hsv(0.0, 80.0, 80.0))
        );
        assert_eq!(
            coloring.type_color("B").map(|pair| pair.color()),
            Some(Rgb::from_hsv(90.0, 90.0, 90.0))
        );
    }

    #[test]
    fn test_node_color_or_neutral() {
        let mut rng = StdRng::seed_from_u64(1);
        let coloring = assign(&graph(&["A"]), &mut rng);

        assert_eq!(coloring.node_color_or_neutral("_"), ColorPair::neutral());
        assert_eq!(
            Some(coloring.node_color_or_neutral("0")),
            coloring.node_color("0")
        );
    }

    #[test]
    fn test_empty_graph_still_has_reserved_types() {
        let mut rng = StdRng::seed_from_u64(1);
        let coloring = assign(&Graph::default(), &mut rng);

        assert!(coloring.node_colors().is_empty());
        assert_eq!(coloring.type_colors().len(), 3);
    }

    proptest! {
        #[test]
        fn prop_reserved_types_are_neutral(
            types in prop::collection::vec(
                prop_oneof![
                    "[A-Z][a-z]{0,6}",
                    Just("null".to_string()),
                    Just("unknown".to_string()),
                    Just("na".to_string()),
                ],
                0..12,
            ),
            seed in any::<u64>(),
        ) {
            let types: Vec<&str> = types.iter().map(String::as_str).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let coloring = assign(&graph(&types), &mut rng);

            for reserved in RESERVED_TYPES {
                let pair = coloring.type_color(reserved).unwrap();
                prop_assert_eq!(pair.color().to_hex(), "#FFFFFF");
                prop_assert_eq!(pair.complementary().to_hex(), "#000000");
            }
        }
    }
}
