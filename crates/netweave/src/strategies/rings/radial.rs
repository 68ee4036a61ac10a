//! Radial layout: people ring and organization ring
//!
//! This is the placement the network view applies before any strategy is
//! chosen. It differs from the hierarchical layout in how the people ring
//! is counted: the anchor keeps its index among the people, leaving a gap
//! in the ring.

use std::f64::consts::TAU;
use tracing::{debug, span, Level};

use crate::core::{
    Database, Graph, LayoutAlgorithm, NodeCategory, Placement, Point, RadialConfig, Strategy,
};

/// Two rings by category, anchor at the centre
#[derive(Debug, Clone, Default)]
pub struct RadialLayout {
    config: RadialConfig,
}

impl RadialLayout {
    pub fn new(config: RadialConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RadialConfig {
        &self.config
    }

    fn radius(&self, category: NodeCategory) -> f64 {
        match category {
            NodeCategory::Person => self.config.person_radius,
            NodeCategory::Organization => self.config.organization_radius,
        }
    }
}

impl LayoutAlgorithm for RadialLayout {
    fn layout(&self, graph: &Graph, anchor: Option<&str>) -> Placement {
        let layout_span = span!(Level::INFO, "layout_radial", node_count = graph.node_count());
        let _enter = layout_span.enter();

        let person_count = graph.people().count();
        let organization_count = graph.organizations().count();
        let mut seen_people = 0usize;
        let mut seen_organizations = 0usize;

        let positions: Vec<Point> = graph
            .nodes()
            .map(|node| {
                let (index, count) = match node.category {
                    NodeCategory::Person => {
                        seen_people += 1;
                        (seen_people - 1, person_count)
                    }
                    NodeCategory::Organization => {
                        seen_organizations += 1;
                        (seen_organizations - 1, organization_count)
                    }
                };
                if anchor == Some(node.id.as_str()) {
                    return Point::ORIGIN;
                }
                let angle = TAU * index as f64 / count as f64;
                Point::on_circle(self.radius(node.category), angle)
            })
            .collect();

        debug!(person_count, organization_count, "Radial rings placed");
        Placement::fixed(positions)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Radial
    }
}
