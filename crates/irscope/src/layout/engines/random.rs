//! Uniform random placement.

use rand::rngs::StdRng;

use crate::{
    layout::{LayoutMap, engines},
    structure::NodeGraph,
};

/// Places every node independently inside the margins.
pub struct Engine;

impl engines::Engine for Engine {
    fn calculate(&self, graph: &NodeGraph<'_>, rng: &mut StdRng) -> LayoutMap {
        graph
            .node_indices()
            .map(|index| (graph.node(index).id().to_string(), engines::scatter(rng)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use irscope_core::graph::{Graph, Node};
    use rand::SeedableRng;

    use super::*;
    use crate::layout::engines::Engine as _;

    #[test]
    fn test_points_stay_inside_margins() {
        let graph = Graph::from_nodes((0..50).map(|id| Node::new(id.to_string(), "T")).collect());
        let nodes = NodeGraph::from_graph(&graph);
        let mut rng = StdRng::seed_from_u64(3);

        let layout = Engine.calculate(&nodes, &mut rng);

        assert_eq!(layout.len(), 50);
        for point in layout.values() {
            assert!((0.05..=0.95).contains(&point.x()));
            assert!((0.05..=0.95).contains(&point.y()));
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let graph = Graph::from_nodes(vec![Node::new("1", "A"), Node::new("2", "B")]);
        let nodes = NodeGraph::from_graph(&graph);

        let first = Engine.calculate(&nodes, &mut StdRng::seed_from_u64(9));
        let second = Engine.calculate(&nodes, &mut StdRng::seed_from_u64(9));

        assert_eq!(first, second);
    }
}
