//! Netweave - Layout engine for people/organization networks
//!
//! Computes 2D positions for a bipartite graph of people and the
//! organizations they relate to, using one of several strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use netweave::{layout, Graph, Strategy};
//!
//! let mut graph = Graph::new();
//! graph.add_person("ada", "Ada").unwrap();
//! graph.add_organization("acme", "Acme").unwrap();
//! graph.add_relationship("ada", "acme", "Founder").unwrap();
//!
//! let result = layout(&graph, Strategy::Grid).unwrap();
//! assert_eq!(result.len(), 2);
//! assert!(result.all_finite());
//! ```
//!
//! # Advanced Usage
//!
//! For more control, configure a [`LayoutEngine`](strategies::LayoutEngine)
//! with constants and an anchor detector:
//!
//! ```rust
//! use netweave::prelude::*;
//!
//! let network = NetworkData::sample();
//! let graph = network.to_graph().unwrap().graph;
//!
//! let engine = LayoutEngine::with_config(LayoutConfig::new().with_seed(7))
//!     .with_detector(KeywordAnchor::new());
//! let result = engine.layout(&graph, Strategy::Hierarchical).unwrap();
//!
//! // The founder sits at the centre
//! assert_eq!(result.anchor.as_deref(), Some("dana-1"));
//! assert_eq!(result.get("dana-1"), Some(Point::ORIGIN));
//! ```

pub mod core;
pub mod network;
pub mod strategies;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        AnchorDetector, AnyOf, Database, EdgeData, Graph, KeywordAnchor, LayoutAlgorithm,
        LayoutConfig, LayoutError, LayoutResult, MarkedAnchor, NoAnchor, NodeCategory, NodeData,
        Point, Strategy,
    };
    pub use crate::network::{NetworkData, Person, Relationship, Startup};
    pub use crate::strategies::{
        CircularLayout, ForceLayout, GridLayout, HierarchicalLayout, LayoutEngine, RadialLayout,
    };
}

/// Lay out a graph with the default engine
///
/// Uses default constants and the [`MarkedAnchor`] detector. The force
/// strategy draws its starting positions from OS entropy; seed it through
/// [`LayoutConfig`] on a [`LayoutEngine`](strategies::LayoutEngine) for
/// reproducible output.
///
/// # Example
/// ```rust
/// use netweave::{layout, Graph, Strategy};
///
/// let mut graph = Graph::new();
/// graph.add_person("a", "A").unwrap();
/// let result = layout(&graph, Strategy::Circular).unwrap();
/// assert_eq!(result.get("a").unwrap().distance(netweave::Point::ORIGIN), 300.0);
/// ```
pub fn layout(graph: &Graph, strategy: Strategy) -> Result<LayoutResult> {
    strategies::LayoutEngine::new().layout(graph, strategy)
}

/// Lay out a graph using a strategy identifier such as `"force"` or `"grid"`
///
/// Unknown identifiers fail with [`LayoutError::InvalidStrategy`].
///
/// # Example
/// ```rust
/// use netweave::{layout_named, Graph, LayoutError};
///
/// let graph = Graph::new();
/// assert!(layout_named(&graph, "grid").unwrap().is_empty());
/// assert!(matches!(
///     layout_named(&graph, "spiral"),
///     Err(LayoutError::InvalidStrategy { .. })
/// ));
/// ```
pub fn layout_named(graph: &Graph, strategy: &str) -> Result<LayoutResult> {
    strategies::LayoutEngine::new().layout_named(graph, strategy)
}
