//! Core type definitions for graph layout
//!
//! This module contains the fundamental types used throughout netweave:
//! node categories, layout strategies, points, and node/edge data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use super::error::LayoutError;

/// Category tag of a node in the bipartite graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    /// An individual
    #[default]
    Person,
    /// A startup, company, or other organization
    #[serde(alias = "startup", alias = "company", alias = "org")]
    Organization,
}

impl NodeCategory {
    /// Returns true for person nodes
    pub fn is_person(&self) -> bool {
        matches!(self, NodeCategory::Person)
    }

    /// Returns true for organization nodes
    pub fn is_organization(&self) -> bool {
        matches!(self, NodeCategory::Organization)
    }
}

impl FromStr for NodeCategory {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "person" | "people" => Ok(NodeCategory::Person),
            "organization" | "organisation" | "startup" | "company" | "org" => {
                Ok(NodeCategory::Organization)
            }
            _ => Err(LayoutError::unknown_category(s)),
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeCategory::Person => write!(f, "person"),
            NodeCategory::Organization => write!(f, "organization"),
        }
    }
}

/// Placement strategy selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Iterative repulsion/attraction simulation
    #[default]
    Force,
    /// Anchor at the centre, people on an inner ring, organizations outside
    Hierarchical,
    /// Every node on one ring, anchor at the centre
    Circular,
    /// Row-major square-ish grid
    Grid,
    /// People ring at 300, organization ring at 500, anchor at the centre
    Radial,
}

impl Strategy {
    /// All strategies in declaration order
    pub const ALL: [Strategy; 5] = [
        Strategy::Force,
        Strategy::Hierarchical,
        Strategy::Circular,
        Strategy::Grid,
        Strategy::Radial,
    ];

    /// Get all valid strategy names
    pub fn variants() -> &'static [&'static str] {
        &["force", "hierarchical", "circular", "grid", "radial"]
    }

    /// Identifier used on the command line and in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Force => "force",
            Strategy::Hierarchical => "hierarchical",
            Strategy::Circular => "circular",
            Strategy::Grid => "grid",
            Strategy::Radial => "radial",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Force => "Force-directed simulation with randomized start",
            Strategy::Hierarchical => "Anchor centred, people and organizations on two rings",
            Strategy::Circular => "All nodes on a single ring, anchor centred",
            Strategy::Grid => "Row-major grid, ceil(sqrt(n)) columns",
            Strategy::Radial => "People ring and organization ring around the anchor",
        }
    }

    /// Returns true if two calls on the same graph give identical positions
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Strategy::Force)
    }
}

impl FromStr for Strategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "force" => Ok(Strategy::Force),
            "hierarchical" => Ok(Strategy::Hierarchical),
            "circular" => Ok(Strategy::Circular),
            "grid" => Ok(Strategy::Grid),
            "radial" => Ok(Strategy::Radial),
            _ => Err(LayoutError::invalid_strategy(s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 2D position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin (0, 0)
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` radians on a circle of `radius` around the origin
    pub fn on_circle(radius: f64, angle: f64) -> Self {
        Self {
            x: angle.cos() * radius,
            y: angle.sin() * radius,
        }
    }

    /// Euclidean length of the vector from the origin
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    /// Returns true if both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A node in the graph with all its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Unique identifier for the node
    pub id: String,
    /// Person or organization
    pub category: NodeCategory,
    /// Display name
    #[serde(default)]
    pub label: String,
    /// Category-specific role text (e.g. "Founder & CEO")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Explicit anchor mark supplied by the caller
    #[serde(default, alias = "isAnchorHint", alias = "isAnchor")]
    pub anchor_hint: bool,
    /// Display attributes, opaque to layout
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub payload: BTreeMap<String, String>,
}

impl NodeData {
    /// Create a new node with no role, payload, or anchor mark
    pub fn new(id: impl Into<String>, category: NodeCategory, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            label: label.into(),
            role: None,
            anchor_hint: false,
            payload: BTreeMap::new(),
        }
    }

    /// Create a person node
    pub fn person(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, NodeCategory::Person, label)
    }

    /// Create an organization node
    pub fn organization(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, NodeCategory::Organization, label)
    }

    /// Set the role text
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Mark this node as the anchor
    pub fn anchored(mut self) -> Self {
        self.anchor_hint = true;
        self
    }

    /// Add a display attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Display name, falling back to the id when no label was given
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// An edge connecting two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Source node ID
    pub source: String,
    /// Target node ID
    pub target: String,
    /// Relationship role shown on the edge
    #[serde(default)]
    pub label: String,
}

impl EdgeData {
    /// Create a new unlabeled edge
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: String::new(),
        }
    }

    /// Create a new edge with a label
    pub fn with_label(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }

    /// Returns true if source and target are the same node
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
