//! Force simulation
//!
//! One iteration is two passes over the position buffer, both updating it
//! in place:
//!
//! 1. repulsion, once per ordered pair `(a, b)`, moving only `a`
//! 2. attraction, once per edge, moving both endpoints by the same vector

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, span, trace, warn, Level};

use crate::core::{Database, ForceConfig, Graph, LayoutAlgorithm, Placement, Point, Strategy};

/// Force-directed layout algorithm
#[derive(Debug, Clone, Default)]
pub struct ForceLayout {
    config: ForceConfig,
}

/// Distance used in force formulas; coincident points count as 1 apart
fn effective_distance(delta: Point) -> f64 {
    let distance = delta.length();
    if distance == 0.0 {
        1.0
    } else {
        distance
    }
}

impl ForceLayout {
    pub fn new(config: ForceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForceConfig {
        &self.config
    }

    /// Run the simulation drawing initial positions from `rng`
    pub fn layout_with_rng<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        anchor: Option<&str>,
        rng: &mut R,
    ) -> Placement {
        let layout_span = span!(
            Level::INFO,
            "layout_force",
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            iterations = self.config.iterations
        );
        let _enter = layout_span.enter();

        if graph.is_empty() {
            trace!("Empty graph, nothing to simulate");
            return Placement {
                skipped_edges: graph.edge_count(),
                ..Placement::default()
            };
        }

        let mut positions = self.initial_positions(graph, anchor, rng);
        let (springs, skipped_edges) = self.springs(graph);
        if skipped_edges > 0 {
            warn!(
                skipped_edges,
                "Ignoring edges that reference nodes missing from the graph"
            );
        }

        let mut iterations = 0;
        let mut previous = positions.clone();
        for iteration in 0..self.config.iterations {
            previous.copy_from_slice(&positions);

            self.repel(&mut positions);
            self.attract(&mut positions, &springs);
            iterations += 1;

            let mut max_move: f64 = 0.0;
            for (current, before) in positions.iter_mut().zip(&previous) {
                if !current.is_finite() {
                    *current = *before;
                    continue;
                }
                max_move = max_move.max(current.distance(*before));
            }
            trace!(iteration, max_move, "Force iteration finished");

            if let Some(epsilon) = self.config.convergence_epsilon {
                if max_move < epsilon {
                    debug!(iteration, max_move, epsilon, "Simulation converged early");
                    break;
                }
            }
        }

        info!(iterations, skipped_edges, "Force layout completed");
        Placement {
            positions,
            skipped_edges,
            iterations,
        }
    }

    /// Anchor at the origin, every other node uniform in the start square
    fn initial_positions<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        anchor: Option<&str>,
        rng: &mut R,
    ) -> Vec<Point> {
        let half = self.config.initial_extent / 2.0;
        graph
            .nodes()
            .map(|node| {
                if anchor == Some(node.id.as_str()) {
                    Point::ORIGIN
                } else {
                    Point::new(rng.random_range(-half..=half), rng.random_range(-half..=half))
                }
            })
            .collect()
    }

    /// Edges as index pairs, plus the number of edges with a missing endpoint
    fn springs(&self, graph: &Graph) -> (Vec<(usize, usize)>, usize) {
        let mut springs = Vec::with_capacity(graph.edge_count());
        let mut skipped = 0;
        for edge in graph.edges() {
            match (graph.node_index(&edge.source), graph.node_index(&edge.target)) {
                (Some(source), Some(target)) => {
                    if source != target {
                        springs.push((source, target));
                    }
                }
                _ => {
                    trace!(source = %edge.source, target = %edge.target, "Skipping dangling edge");
                    skipped += 1;
                }
            }
        }
        (springs, skipped)
    }

    fn repel(&self, positions: &mut [Point]) {
        let scale = self.config.repulsion * self.config.damping;
        for a in 0..positions.len() {
            for b in 0..positions.len() {
                if a == b {
                    continue;
                }
                let delta = positions[a] - positions[b];
                let distance = effective_distance(delta);
                // |push| = repulsion / distance^2 * damping along the unit vector
                let push = scale / (distance * distance * distance);
                positions[a] += delta * push;
            }
        }
    }

    fn attract(&self, positions: &mut [Point], springs: &[(usize, usize)]) {
        for &(source, target) in springs {
            let delta = positions[target] - positions[source];
            let distance = effective_distance(delta);
            let force = distance * self.config.attraction;
            let pull = delta * (force / distance);
            positions[source] += pull;
            positions[target] -= pull;
        }
    }
}

impl LayoutAlgorithm for ForceLayout {
    fn layout(&self, graph: &Graph, anchor: Option<&str>) -> Placement {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.layout_with_rng(graph, anchor, &mut rng)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Force
    }
}
