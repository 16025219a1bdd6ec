//! Edge type resolution.

use std::collections::HashMap;

use irscope_core::graph::{Edge, Graph, NULL_TYPE};
use log::debug;

/// Return a copy of `graph` whose edges carry the type of the node they
/// point at.
///
/// `_` edges become `null`. Edges to ids that are not in the graph keep the
/// `unknown` type. Runs after the whole dump is read since edges may point
/// at nodes defined further down.
///
/// # Examples
///
/// ```
/// # use irscope_core::graph::{Edge, Graph, Node};
/// # use irscope_parser::resolve_edge_types;
/// let graph = Graph::from_nodes(vec![
///     Node::new("1", "TypeA"),
///     Node::new("2", "TypeB").with_in_edges(vec![Edge::new("1"), Edge::new("_")]),
/// ]);
///
/// let resolved = resolve_edge_types(&graph);
/// let edges = resolved.nodes()[1].in_edges();
/// assert_eq!(edges[0].edge_type(), "TypeA");
/// assert_eq!(edges[1].edge_type(), "null");
/// ```
pub fn resolve_edge_types(graph: &Graph) -> Graph {
    let types: HashMap<&str, &str> = graph
        .index()
        .into_iter()
        .map(|(id, node)| (id, node.node_type()))
        .collect();

    let mut unresolved = 0usize;
    let mut resolve = |edge: Edge| {
        if edge.is_null() {
            return edge.with_type(NULL_TYPE);
        }
        match types.get(edge.id()) {
            Some(&node_type) => edge.with_type(node_type),
            None => {
                unresolved += 1;
                edge
            }
        }
    };

    let nodes = graph
        .nodes()
        .iter()
        .cloned()
        .map(|node| node.map_edges(&mut resolve))
        .collect();

    debug!(unresolved; "Resolved edge types");

    Graph::new(nodes, graph.node_types().clone())
}
