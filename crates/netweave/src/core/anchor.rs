//! Anchor detection
//!
//! The anchor is the node that ring-based layouts pin at the origin (in the
//! people/organization network this is usually the founder). Which node is
//! the anchor is decided by a caller-supplied [`AnchorDetector`], evaluated
//! once per layout pass.
//!
//! # Example
//! ```
//! use netweave::core::{AnchorDetector, KeywordAnchor, NodeData};
//!
//! let detector = KeywordAnchor::new().with_identifier("dana");
//! assert!(detector.is_anchor(&NodeData::person("p1", "Dana Reyes")));
//! assert!(detector.is_anchor(&NodeData::person("p2", "Lee").with_role("Co-Founder")));
//! assert!(!detector.is_anchor(&NodeData::person("p3", "Sam").with_role("CTO")));
//! ```

use tracing::trace;

use super::graph::Graph;
use super::types::NodeData;

/// Decides whether a node is the anchor
pub trait AnchorDetector: Send + Sync {
    /// Returns true if the node should be treated as the anchor
    fn is_anchor(&self, node: &NodeData) -> bool;

    /// Name of this detector, for logging
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> AnchorDetector for F
where
    F: Fn(&NodeData) -> bool + Send + Sync,
{
    fn is_anchor(&self, node: &NodeData) -> bool {
        self(node)
    }
}

/// Find the anchor of a graph: the first node, in graph order, the detector accepts
pub fn find_anchor<'g>(graph: &'g Graph, detector: &dyn AnchorDetector) -> Option<&'g NodeData> {
    let anchor = graph
        .node_slice()
        .iter()
        .find(|node| detector.is_anchor(node));
    trace!(
        detector = detector.name(),
        anchor = anchor.map(|n| n.id.as_str()),
        "Anchor detection finished"
    );
    anchor
}

/// Uses the `anchor_hint` flag set on the node
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkedAnchor;

impl AnchorDetector for MarkedAnchor {
    fn is_anchor(&self, node: &NodeData) -> bool {
        node.anchor_hint
    }

    fn name(&self) -> &'static str {
        "marked"
    }
}

/// Never selects an anchor
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnchor;

impl AnchorDetector for NoAnchor {
    fn is_anchor(&self, _node: &NodeData) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Matches role text against marker terms and labels against known identifiers
///
/// Both comparisons are case-insensitive substring matches. The default
/// detector knows the role marker `founder` and no identifiers.
#[derive(Debug, Clone)]
pub struct KeywordAnchor {
    role_markers: Vec<String>,
    identifiers: Vec<String>,
}

impl KeywordAnchor {
    /// Detector with the default `founder` role marker
    pub fn new() -> Self {
        Self {
            role_markers: vec!["founder".to_string()],
            identifiers: Vec::new(),
        }
    }

    /// Detector with no markers or identifiers configured
    pub fn empty() -> Self {
        Self {
            role_markers: Vec::new(),
            identifiers: Vec::new(),
        }
    }

    /// Add a role marker term
    pub fn with_role_marker(mut self, marker: impl AsRef<str>) -> Self {
        self.role_markers.push(marker.as_ref().to_lowercase());
        self
    }

    /// Add a display-name identifier
    pub fn with_identifier(mut self, identifier: impl AsRef<str>) -> Self {
        self.identifiers.push(identifier.as_ref().to_lowercase());
        self
    }

    /// Configured role markers, lowercased
    pub fn role_markers(&self) -> &[String] {
        &self.role_markers
    }

    /// Configured identifiers, lowercased
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

impl Default for KeywordAnchor {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorDetector for KeywordAnchor {
    fn is_anchor(&self, node: &NodeData) -> bool {
        let role_match = node.role.as_deref().is_some_and(|role| {
            let role = role.to_lowercase();
            self.role_markers
                .iter()
                .any(|m| !m.is_empty() && role.contains(m.as_str()))
        });
        if role_match {
            return true;
        }
        let label = node.label.to_lowercase();
        self.identifiers
            .iter()
            .any(|i| !i.is_empty() && label.contains(i.as_str()))
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

/// Accepts a node if any of the wrapped detectors does
#[derive(Default)]
pub struct AnyOf {
    detectors: Vec<Box<dyn AnchorDetector>>,
}

impl AnyOf {
    /// Create an empty combinator (matches nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detector
    pub fn with(mut self, detector: impl AnchorDetector + 'static) -> Self {
        self.detectors.push(Box::new(detector));
        self
    }

    /// Number of wrapped detectors
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Returns true if no detectors were added
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl AnchorDetector for AnyOf {
    fn is_anchor(&self, node: &NodeData) -> bool {
        self.detectors.iter().any(|d| d.is_anchor(node))
    }

    fn name(&self) -> &'static str {
        "any-of"
    }
}
