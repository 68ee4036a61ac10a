//! Graph storage consumed by the layout engine
//!
//! Stores nodes with unique ids in insertion order and edges as given.
//! Edge endpoints are not validated on insert: referential integrity is the
//! builder's job, and the layout strategies skip dangling edges.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

use super::database::Database;
use super::error::{LayoutError, Result};
use super::types::{EdgeData, NodeCategory, NodeData};

/// Serialized shape of a graph: `{ "nodes": [...], "edges": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphParts {
    #[serde(default)]
    pub nodes: Vec<NodeData>,
    #[serde(default)]
    pub edges: Vec<EdgeData>,
}

/// Bipartite relationship graph
///
/// Maintains insertion order for deterministic layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "GraphParts", into = "GraphParts")]
pub struct Graph {
    /// Nodes in insertion order
    nodes: Vec<NodeData>,
    /// Node id to position in `nodes`
    index: HashMap<String, usize>,
    /// Edges in insertion order
    edges: Vec<EdgeData>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from node and edge lists, rejecting duplicate node ids
    pub fn from_parts(nodes: Vec<NodeData>, edges: Vec<EdgeData>) -> Result<Self> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Parse a graph from its JSON representation
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize the graph to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of a node in insertion order
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Nodes as a slice in insertion order
    pub fn node_slice(&self) -> &[NodeData] {
        &self.nodes
    }

    /// Iterate over person nodes in insertion order
    pub fn people(&self) -> impl Iterator<Item = &NodeData> {
        self.nodes_in(NodeCategory::Person)
    }

    /// Iterate over organization nodes in insertion order
    pub fn organizations(&self) -> impl Iterator<Item = &NodeData> {
        self.nodes_in(NodeCategory::Organization)
    }

    /// Iterate over the nodes of one category
    pub fn nodes_in(&self, category: NodeCategory) -> impl Iterator<Item = &NodeData> {
        self.nodes.iter().filter(move |n| n.category == category)
    }

    /// Edges whose source or target is not a node of this graph
    pub fn dangling_edges(&self) -> Vec<&EdgeData> {
        self.edges
            .iter()
            .filter(|e| !self.has_node(&e.source) || !self.has_node(&e.target))
            .collect()
    }

    /// Add a person node
    pub fn add_person(&mut self, id: &str, label: &str) -> Result<()> {
        self.add_node(NodeData::person(id, label))
    }

    /// Add an organization node
    pub fn add_organization(&mut self, id: &str, label: &str) -> Result<()> {
        self.add_node(NodeData::organization(id, label))
    }

    /// Add a labeled edge
    pub fn add_relationship(&mut self, source: &str, target: &str, label: &str) -> Result<()> {
        self.add_edge(EdgeData::with_label(source, target, label))
    }
}

impl Database for Graph {
    type Node = NodeData;
    type Edge = EdgeData;

    fn add_node(&mut self, node: NodeData) -> Result<()> {
        trace!(node_id = %node.id, category = %node.category, "Adding node to graph");
        if self.index.contains_key(&node.id) {
            debug!(node_id = %node.id, "Rejected duplicate node id");
            return Err(LayoutError::duplicate_node(node.id));
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    fn add_edge(&mut self, edge: EdgeData) -> Result<()> {
        trace!(
            source = %edge.source,
            target = %edge.target,
            label = %edge.label,
            "Adding edge to graph"
        );
        self.edges.push(edge);
        Ok(())
    }

    fn get_node(&self, id: &str) -> Option<&NodeData> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.edges.iter()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.edges.clear();
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl TryFrom<GraphParts> for Graph {
    type Error = LayoutError;

    fn try_from(parts: GraphParts) -> Result<Self> {
        Graph::from_parts(parts.nodes, parts.edges)
    }
}

impl From<Graph> for GraphParts {
    fn from(graph: Graph) -> Self {
        GraphParts {
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}
