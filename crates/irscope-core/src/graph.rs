//! Parsed compiler IR graph.
//!
//! A [`Graph`] is the flat node collection produced by one parse of a dump.
//! Edges are references by id owned by the node that lists them; there is no
//! shared mutable link structure between nodes.
//!
//! # Overview
//!
//! - [`Node`] - One IR instruction or value with its three edge lists.
//! - [`Edge`] - A reference to another node id, classified by the type of
//!   the node it points at.
//! - [`Graph`] - The ordered node collection plus the distinct node types in
//!   first-seen order.

use std::collections::HashMap;

use indexmap::IndexSet;
use serde::Serialize;

/// Edge id used by dumps to mean "no node".
pub const NULL_EDGE_ID: &str = "_";

/// Type label given to edges whose id is [`NULL_EDGE_ID`].
pub const NULL_TYPE: &str = "null";

/// Type label of an edge whose target could not be resolved.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Type label reserved for "not applicable" cells.
pub const NA_TYPE: &str = "na";

/// Type labels that always color with the neutral pair.
pub const RESERVED_TYPES: [&str; 3] = [NULL_TYPE, UNKNOWN_TYPE, NA_TYPE];

/// A directed reference from one node to another.
///
/// The `edge_type` starts as [`UNKNOWN_TYPE`] and is filled in once every
/// node of the dump is known, because dumps reference nodes that are
/// defined further down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    id: String,
    #[serde(rename = "type")]
    edge_type: String,
}

impl Edge {
    /// Creates an unresolved edge pointing at `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            edge_type: UNKNOWN_TYPE.to_string(),
        }
    }

    /// Returns a copy of this edge carrying the given type label.
    pub fn with_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_type = edge_type.into();
        self
    }

    /// The referenced node id, or [`NULL_EDGE_ID`].
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The type of the referenced node.
    pub fn edge_type(&self) -> &str {
        &self.edge_type
    }

    /// Returns `true` if this edge is the `_` placeholder.
    pub fn is_null(&self) -> bool {
        self.id == NULL_EDGE_ID
    }
}

/// One node of an IR graph dump.
///
/// # Examples
///
/// ```
/// # use irscope_core::graph::{Edge, Node};
/// let node = Node::new("12", "AddI")
///     .with_in_edges(vec![Edge::new("10"), Edge::new("11")])
///     .with_out_edges(vec![Edge::new("13")]);
///
/// assert_eq!(node.id(), "12");
/// assert_eq!(node.in_edges().len(), 2);
/// assert!(!node.is_focus());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    id: String,
    #[serde(rename = "type")]
    node_type: String,
    in_edges: Vec<Edge>,
    special_in_edges: Vec<Edge>,
    out_edges: Vec<Edge>,
    details: String,
    focus: bool,
    line: usize,
}

impl Node {
    /// Creates a node with no edges, no details and no focus marker.
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            in_edges: Vec::new(),
            special_in_edges: Vec::new(),
            out_edges: Vec::new(),
            details: String::new(),
            focus: false,
            line: 0,
        }
    }

    pub fn with_in_edges(mut self, edges: Vec<Edge>) -> Self {
        self.in_edges = edges;
        self
    }

    pub fn with_special_in_edges(mut self, edges: Vec<Edge>) -> Self {
        self.special_in_edges = edges;
        self
    }

    pub fn with_out_edges(mut self, edges: Vec<Edge>) -> Self {
        self.out_edges = edges;
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_focus(mut self, focus: bool) -> Self {
        self.focus = focus;
        self
    }

    /// Sets the 1-based source line the node was read from.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn in_edges(&self) -> &[Edge] {
        &self.in_edges
    }

    /// Edges listed in the parenthesized sub-list after the inputs.
    pub fn special_in_edges(&self) -> &[Edge] {
        &self.special_in_edges
    }

    pub fn out_edges(&self) -> &[Edge] {
        &self.out_edges
    }

    /// Free-form text trailing the edge lists.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns `true` if the dump marked this node with `>`.
    pub fn is_focus(&self) -> bool {
        self.focus
    }

    /// The 1-based source line, or 0 for nodes built in code.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Iterates over input, special-input and output edges in that order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.in_edges
            .iter()
            .chain(&self.special_in_edges)
            .chain(&self.out_edges)
    }

    /// Returns a node whose every edge has been passed through `f`.
    pub fn map_edges(self, mut f: impl FnMut(Edge) -> Edge) -> Self {
        let Self {
            id,
            node_type,
            in_edges,
            special_in_edges,
            out_edges,
            details,
            focus,
            line,
        } = self;

        Self {
            id,
            node_type,
            in_edges: in_edges.into_iter().map(&mut f).collect(),
            special_in_edges: special_in_edges.into_iter().map(&mut f).collect(),
            out_edges: out_edges.into_iter().map(&mut f).collect(),
            details,
            focus,
            line,
        }
    }
}

/// The node collection produced by one parse.
///
/// Nodes keep the order of the source lines they were read from, and node
/// ids are unique within a graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    node_types: IndexSet<String>,
}

impl Graph {
    /// Creates a graph from parsed nodes and their distinct types.
    pub fn new(nodes: Vec<Node>, node_types: IndexSet<String>) -> Self {
        Self { nodes, node_types }
    }

    /// Creates a graph from nodes, collecting the distinct types in order.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let node_types = nodes
            .iter()
            .map(|node| node.node_type().to_string())
            .collect();
        Self { nodes, node_types }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Distinct node type labels in first-seen order.
    pub fn node_types(&self) -> &IndexSet<String> {
        &self.node_types
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Returns `true` if a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Builds an id to node index. The first node wins on duplicate ids.
    pub fn index(&self) -> HashMap<&str, &Node> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            index.entry(node.id()).or_insert(node);
        }
        index
    }

    /// Consumes the graph, returning its nodes and distinct types.
    pub fn into_parts(self) -> (Vec<Node>, IndexSet<String>) {
        (self.nodes, self.node_types)
    }
}
