//! Hierarchical layout: anchor, people ring, organization ring

use tracing::{debug, span, Level};

use super::place_ring;
use crate::core::{
    Database, Graph, HierarchicalConfig, LayoutAlgorithm, NodeCategory, Placement, Point, Strategy,
};

/// Three concentric levels around the origin
///
/// The anchor sits at the centre, the remaining people on the inner ring
/// and every organization on the outer ring.
#[derive(Debug, Clone, Default)]
pub struct HierarchicalLayout {
    config: HierarchicalConfig,
}

impl HierarchicalLayout {
    pub fn new(config: HierarchicalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HierarchicalConfig {
        &self.config
    }
}

impl LayoutAlgorithm for HierarchicalLayout {
    fn layout(&self, graph: &Graph, anchor: Option<&str>) -> Placement {
        let layout_span = span!(
            Level::INFO,
            "layout_hierarchical",
            node_count = graph.node_count()
        );
        let _enter = layout_span.enter();

        let mut positions = vec![Point::ORIGIN; graph.node_count()];
        let mut people = Vec::new();
        let mut organizations = Vec::new();
        for (index, node) in graph.nodes().enumerate() {
            if anchor == Some(node.id.as_str()) {
                continue;
            }
            match node.category {
                NodeCategory::Person => people.push(index),
                NodeCategory::Organization => organizations.push(index),
            }
        }

        place_ring(&mut positions, &people, self.config.person_radius);
        place_ring(&mut positions, &organizations, self.config.organization_radius);

        debug!(
            people = people.len(),
            organizations = organizations.len(),
            anchored = anchor.is_some(),
            "Hierarchical rings placed"
        );
        Placement::fixed(positions)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Hierarchical
    }
}
