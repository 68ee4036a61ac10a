//! Core layout trait and result type
//!
//! Every strategy implements [`LayoutAlgorithm`]: it receives the graph and
//! the id of the anchor chosen for this pass, and returns one position per
//! node, aligned with the graph's insertion order. The dispatcher wraps that
//! into a [`LayoutResult`] keyed by node id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::Result;
use super::graph::Graph;
use super::types::{Point, Strategy};

/// Raw output of a layout algorithm
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Placement {
    /// One position per node, in graph insertion order
    pub positions: Vec<Point>,
    /// Edges ignored because an endpoint is not in the graph
    pub skipped_edges: usize,
    /// Iterations actually run (0 for non-iterative strategies)
    pub iterations: usize,
}

impl Placement {
    /// Placement from a deterministic, non-iterative strategy
    pub fn fixed(positions: Vec<Point>) -> Self {
        Self {
            positions,
            skipped_edges: 0,
            iterations: 0,
        }
    }
}

/// Core trait for layout algorithms
///
/// # Example
/// ```
/// use netweave::core::{Graph, LayoutAlgorithm, GridConfig};
/// use netweave::strategies::GridLayout;
///
/// let mut graph = Graph::new();
/// graph.add_person("a", "A").unwrap();
/// let placement = GridLayout::new(GridConfig::default()).layout(&graph, None);
/// assert_eq!(placement.positions.len(), 1);
/// ```
pub trait LayoutAlgorithm: Send + Sync {
    /// Compute one position per node of `graph`
    fn layout(&self, graph: &Graph, anchor: Option<&str>) -> Placement;

    /// Get the strategy this algorithm implements
    fn strategy(&self) -> Strategy;

    /// Get the name of this layout algorithm
    fn name(&self) -> &'static str {
        self.strategy().as_str()
    }
}

/// Final positions keyed by node id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Strategy that produced the positions
    pub strategy: Strategy,
    /// Anchor chosen for this pass, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Position of every node
    pub positions: BTreeMap<String, Point>,
    /// Edges ignored because an endpoint is not in the graph
    #[serde(default)]
    pub skipped_edges: usize,
    /// Iterations run by the force simulation (0 otherwise)
    #[serde(default)]
    pub iterations: usize,
}

impl LayoutResult {
    /// Key a placement by the ids of `graph`
    pub fn from_placement(
        graph: &Graph,
        strategy: Strategy,
        anchor: Option<&str>,
        placement: Placement,
    ) -> Self {
        debug_assert_eq!(graph.node_slice().len(), placement.positions.len());
        let positions = graph
            .node_slice()
            .iter()
            .zip(placement.positions)
            .map(|(node, point)| (node.id.clone(), point))
            .collect();

        Self {
            strategy,
            anchor: anchor.map(str::to_string),
            positions,
            skipped_edges: placement.skipped_edges,
            iterations: placement.iterations,
        }
    }

    /// Position of a node
    pub fn get(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    /// Number of positioned nodes
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no nodes were positioned
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over `(id, position)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.positions.iter().map(|(id, p)| (id.as_str(), *p))
    }

    /// Returns true if every coordinate is finite
    pub fn all_finite(&self) -> bool {
        self.positions.values().all(Point::is_finite)
    }

    /// Smallest axis-aligned box holding every position, as `(min, max)`
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.positions.values();
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph {
        let mut g = Graph::new();
        g.add_person("b", "B").unwrap();
        g.add_organization("a", "A").unwrap();
        g
    }

    #[test]
    fn test_from_placement_keys_by_id() {
        let g = graph();
        let placement = Placement {
            positions: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            skipped_edges: 1,
            iterations: 5,
        };
        let result = LayoutResult::from_placement(&g, Strategy::Force, Some("b"), placement);
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("b"), Some(Point::new(1.0, 2.0)));
        assert_eq!(result.get("a"), Some(Point::new(3.0, 4.0)));
        assert_eq!(result.anchor.as_deref(), Some("b"));
        assert_eq!(result.skipped_edges, 1);
        assert_eq!(result.iterations, 5);
        let ids: Vec<&str> = result.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_result() {
        let result =
            LayoutResult::from_placement(&Graph::new(), Strategy::Grid, None, Placement::default());
        assert!(result.is_empty());
        assert!(result.bounds().is_none());
        assert!(result.all_finite());
    }

    #[test]
    fn test_bounds() {
        let g = graph();
        let result = LayoutResult::from_placement(
            &g,
            Strategy::Grid,
            None,
            Placement::fixed(vec![Point::new(-5.0, 2.0), Point::new(3.0, -4.0)]),
        );
        let (min, max) = result.bounds().unwrap();
        assert_eq!(min, Point::new(-5.0, -4.0));
        assert_eq!(max, Point::new(3.0, 2.0));
    }

    #[test]
    fn test_json_shape() {
        let g = graph();
        let result = LayoutResult::from_placement(
            &g,
            Strategy::Circular,
            None,
            Placement::fixed(vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0)]),
        );
        let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(value["strategy"], "circular");
        assert_eq!(value["positions"]["a"]["x"], 2.0);
        assert_eq!(value["positions"]["b"]["y"], 1.0);
        assert!(value.get("anchor").is_none());
    }
}
