//! Circular layout: one ring, anchor at the centre

use std::f64::consts::TAU;
use tracing::{debug, span, Level};

use crate::core::{CircularConfig, Database, Graph, LayoutAlgorithm, Placement, Point, Strategy};

/// Every node on a single ring
///
/// Angles are spread over the full node sequence. The anchor keeps its slot
/// in that sequence, so the ring has a gap where it would have been, but is
/// itself drawn at the origin.
#[derive(Debug, Clone, Default)]
pub struct CircularLayout {
    config: CircularConfig,
}

impl CircularLayout {
    pub fn new(config: CircularConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CircularConfig {
        &self.config
    }
}

impl LayoutAlgorithm for CircularLayout {
    fn layout(&self, graph: &Graph, anchor: Option<&str>) -> Placement {
        let layout_span = span!(Level::INFO, "layout_circular", node_count = graph.node_count());
        let _enter = layout_span.enter();

        let count = graph.node_count();
        if count == 0 {
            return Placement::default();
        }

        let step = TAU / count as f64;
        let positions: Vec<Point> = graph
            .nodes()
            .enumerate()
            .map(|(i, node)| {
                if anchor == Some(node.id.as_str()) {
                    Point::ORIGIN
                } else {
                    Point::on_circle(self.config.radius, step * i as f64)
                }
            })
            .collect();

        debug!(radius = self.config.radius, count, "Circular ring placed");
        Placement::fixed(positions)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Circular
    }
}
