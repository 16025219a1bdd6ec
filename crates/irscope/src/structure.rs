//! Connectivity view of a parsed dump used by the layout engines.
//!
//! Edges are kept only when both ends are nodes of the dump and the edge is
//! not a self reference. Each edge remembers which side declared it, since a
//! node's own input and output lists decide where some engines place it.

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;
use log::trace;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use irscope_core::graph::{Graph, Node};

/// Which end of an edge listed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declared {
    /// Listed in the target's input or special input list.
    ByTarget,
    /// Listed in the source's output list.
    BySource,
}

/// Directed graph over the nodes of a dump.
///
/// Node indices follow node order, so `NodeIndex::new(i)` is the `i`-th
/// node of the dump.
#[derive(Debug)]
pub struct NodeGraph<'a> {
    graph: DiGraph<&'a Node, Declared>,
}

impl<'a> NodeGraph<'a> {
    pub fn from_graph(source: &'a Graph) -> Self {
        let mut graph = DiGraph::with_capacity(source.len(), 0);
        let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(source.len());
        for node in source.nodes() {
            let index = graph.add_node(node);
            indices.entry(node.id()).or_insert(index);
        }

        let mut dropped = 0usize;
        for (index, node) in graph.node_indices().zip(source.nodes()) {
            let inputs = node
                .in_edges()
                .iter()
                .chain(node.special_in_edges())
                .map(|edge| edge.id());
            for input in known_ids(inputs, &indices, index, &mut dropped) {
                graph.add_edge(input, index, Declared::ByTarget);
            }

            let outputs = node.out_edges().iter().map(|edge| edge.id());
            for output in known_ids(outputs, &indices, index, &mut dropped) {
                graph.add_edge(index, output, Declared::BySource);
            }
        }

        trace!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dropped;
            "Built node graph"
        );

        Self { graph }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node(&self, index: NodeIndex) -> &'a Node {
        self.graph[index]
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Nodes this node lists as inputs.
    pub fn inputs(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .edges_directed(index, Direction::Incoming)
            .filter(|edge| *edge.weight() == Declared::ByTarget)
            .map(|edge| edge.source())
    }

    /// Nodes this node lists as outputs.
    pub fn outputs(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .edges_directed(index, Direction::Outgoing)
            .filter(|edge| *edge.weight() == Declared::BySource)
            .map(|edge| edge.target())
    }

    /// Connected groups of nodes, ignoring direction.
    ///
    /// Nodes are visited in order; each node merges every earlier group it
    /// shares an edge with into one new group that is appended last.
    pub fn groups(&self) -> Vec<Vec<NodeIndex>> {
        let mut groups: Vec<Vec<NodeIndex>> = Vec::new();

        for index in self.graph.node_indices() {
            let neighbors: HashSet<NodeIndex> = self.graph.neighbors_undirected(index).collect();

            let (touching, rest): (Vec<_>, Vec<_>) = groups
                .into_iter()
                .partition(|group| group.iter().any(|member| neighbors.contains(member)));

            let mut merged: Vec<NodeIndex> = touching.into_iter().flatten().collect();
            merged.push(index);

            groups = rest;
            groups.push(merged);
        }

        groups
    }

    /// Depth of every node in `group`: 0 without inputs, otherwise one more
    /// than its deepest input.
    ///
    /// An input that is still being expanded when reached again closes a
    /// cycle and does not count.
    pub fn depths(&self, group: &[NodeIndex]) -> HashMap<NodeIndex, usize> {
        let mut depths: HashMap<NodeIndex, usize> = HashMap::with_capacity(group.len());
        let mut expanding: HashSet<NodeIndex> = HashSet::new();
        let mut stack: Vec<(NodeIndex, bool)> = Vec::new();

        for &start in group {
            stack.push((start, false));

            while let Some((index, expanded)) = stack.pop() {
                if depths.contains_key(&index) {
                    continue;
                }

                if expanded {
                    let depth = self
                        .inputs(index)
                        .filter_map(|input| depths.get(&input))
                        .map(|depth| depth + 1)
                        .max()
                        .unwrap_or(0);
                    depths.insert(index, depth);
                    expanding.remove(&index);
                    continue;
                }

                if !expanding.insert(index) {
                    continue;
                }
                stack.push((index, true));
                for input in self.inputs(index) {
                    if !depths.contains_key(&input) && !expanding.contains(&input) {
                        stack.push((input, false));
                    }
                }
            }
        }

        depths
    }
}

/// Distinct indices of `ids` that name another node of the dump.
fn known_ids<'s>(
    ids: impl Iterator<Item = &'s str>,
    indices: &HashMap<&str, NodeIndex>,
    from: NodeIndex,
    dropped: &mut usize,
) -> IndexSet<NodeIndex> {
    ids.filter_map(|id| match indices.get(id) {
        Some(&index) if index != from => Some(index),
        _ => {
            *dropped += 1;
            None
        }
    })
    .collect()
}
