//! Strategy dispatcher
//!
//! The engine wires anchor detection, configuration, and the strategy
//! implementations together so callers can lay out a graph with a single
//! call. It holds no state between calls; one engine can serve many
//! graphs, from many threads.

use rand::Rng;
use tracing::{debug, info, span, Level};

use crate::core::{
    find_anchor, AnchorDetector, Database, Graph, LayoutAlgorithm, LayoutConfig, LayoutResult,
    MarkedAnchor, NodeData, Result, Strategy,
};
use crate::strategies::{CircularLayout, ForceLayout, GridLayout, HierarchicalLayout, RadialLayout};

/// Layout engine that dispatches to the selected strategy
pub struct LayoutEngine {
    config: LayoutConfig,
    detector: Box<dyn AnchorDetector>,
}

impl LayoutEngine {
    /// Create an engine with default configuration and marked-anchor detection
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create an engine with a specific configuration
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            detector: Box::new(MarkedAnchor),
        }
    }

    /// Replace the anchor detector
    pub fn with_detector(mut self, detector: impl AnchorDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Name of the active anchor detector
    pub fn detector_name(&self) -> &'static str {
        self.detector.name()
    }

    /// Anchor this engine would pick for `graph`
    pub fn anchor<'g>(&self, graph: &'g Graph) -> Option<&'g NodeData> {
        find_anchor(graph, self.detector.as_ref())
    }

    /// Build the algorithm for a strategy from the engine configuration
    pub fn algorithm(&self, strategy: Strategy) -> Box<dyn LayoutAlgorithm> {
        match strategy {
            Strategy::Force => Box::new(ForceLayout::new(self.config.force.clone())),
            Strategy::Hierarchical => {
                Box::new(HierarchicalLayout::new(self.config.hierarchical.clone()))
            }
            Strategy::Circular => Box::new(CircularLayout::new(self.config.circular.clone())),
            Strategy::Grid => Box::new(GridLayout::new(self.config.grid.clone())),
            Strategy::Radial => Box::new(RadialLayout::new(self.config.radial.clone())),
        }
    }

    /// Lay out `graph` with `strategy`
    pub fn layout(&self, graph: &Graph, strategy: Strategy) -> Result<LayoutResult> {
        self.run(graph, strategy, |anchor| {
            self.algorithm(strategy).layout(graph, anchor)
        })
    }

    /// Lay out `graph` with a strategy given by name
    ///
    /// Unknown names fail with [`LayoutError::InvalidStrategy`](crate::core::LayoutError).
    pub fn layout_named(&self, graph: &Graph, strategy: &str) -> Result<LayoutResult> {
        let strategy: Strategy = strategy.parse()?;
        self.layout(graph, strategy)
    }

    /// Lay out `graph` drawing any randomness from `rng`
    ///
    /// Only the force strategy consumes randomness; the others ignore `rng`.
    pub fn layout_with_rng<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<LayoutResult> {
        self.run(graph, strategy, |anchor| match strategy {
            Strategy::Force => {
                ForceLayout::new(self.config.force.clone()).layout_with_rng(graph, anchor, rng)
            }
            other => self.algorithm(other).layout(graph, anchor),
        })
    }

    fn run<F>(&self, graph: &Graph, strategy: Strategy, place: F) -> Result<LayoutResult>
    where
        F: FnOnce(Option<&str>) -> crate::core::Placement,
    {
        let layout_span = span!(
            Level::INFO,
            "layout",
            strategy = strategy.as_str(),
            node_count = graph.node_count(),
            edge_count = graph.edge_count()
        );
        let _enter = layout_span.enter();

        self.config.validate()?;

        let anchor = self.anchor(graph).map(|node| node.id.as_str());
        debug!(detector = self.detector.name(), anchor, "Anchor resolved");

        let placement = place(anchor);
        let result = LayoutResult::from_placement(graph, strategy, anchor, placement);

        info!(
            positioned = result.len(),
            skipped_edges = result.skipped_edges,
            "Layout completed"
        );
        Ok(result)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeywordAnchor, LayoutError, NoAnchor, Point};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn graph() -> Graph {
        let mut g = Graph::new();
        g.add_node(NodeData::person("p1", "Dana").with_role("Founder"))
            .unwrap();
        g.add_person("p2", "Lee").unwrap();
        g.add_organization("o1", "Acme").unwrap();
        g.add_relationship("p1", "o1", "Founder").unwrap();
        g.add_relationship("p2", "o1", "CTO").unwrap();
        g
    }

    #[test]
    fn test_every_strategy_covers_every_node() {
        let engine = LayoutEngine::new();
        let g = graph();
        for strategy in Strategy::ALL {
            let result = engine.layout(&g, strategy).unwrap();
            assert_eq!(result.len(), 3, "{strategy}");
            assert_eq!(result.strategy, strategy);
            assert!(result.all_finite());
        }
    }

    #[test]
    fn test_empty_graph_for_every_strategy() {
        let engine = LayoutEngine::new();
        for strategy in Strategy::ALL {
            let result = engine.layout(&Graph::new(), strategy).unwrap();
            assert!(result.is_empty());
            assert!(result.anchor.is_none());
        }
    }

    #[test]
    fn test_layout_named_rejects_unknown() {
        let engine = LayoutEngine::new();
        let err = engine.layout_named(&graph(), "spiral").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidStrategy { ref strategy, .. } if strategy == "spiral"));
        assert!(engine.layout_named(&graph(), "CIRCULAR").is_ok());
    }

    #[test]
    fn test_default_detector_uses_marks() {
        let engine = LayoutEngine::new();
        assert_eq!(engine.detector_name(), "marked");
        assert!(engine.anchor(&graph()).is_none());
    }

    #[test]
    fn test_keyword_detector_anchor_centred() {
        let engine = LayoutEngine::new().with_detector(KeywordAnchor::new());
        let result = engine.layout(&graph(), Strategy::Hierarchical).unwrap();
        assert_eq!(result.anchor.as_deref(), Some("p1"));
        assert_eq!(result.get("p1"), Some(Point::ORIGIN));
    }

    #[test]
    fn test_no_anchor_detector() {
        let mut g = graph();
        g.add_node(NodeData::person("p3", "Sam").anchored()).unwrap();
        let engine = LayoutEngine::new().with_detector(NoAnchor);
        let result = engine.layout(&g, Strategy::Circular).unwrap();
        assert!(result.anchor.is_none());
        assert!(result.iter().all(|(_, p)| (p.length() - 300.0).abs() < 1e-9));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let mut config = LayoutConfig::default();
        config.grid.cell_width = f64::NAN;
        let engine = LayoutEngine::with_config(config);
        let err = engine.layout(&graph(), Strategy::Grid).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig { .. }));
    }

    #[test]
    fn test_injected_rng_is_reproducible() {
        let engine = LayoutEngine::new();
        let g = graph();
        let a = engine
            .layout_with_rng(&g, Strategy::Force, &mut StdRng::seed_from_u64(8))
            .unwrap();
        let b = engine
            .layout_with_rng(&g, Strategy::Force, &mut StdRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.iterations, 100);
    }

    #[test]
    fn test_injected_rng_ignored_by_deterministic_strategies() {
        let engine = LayoutEngine::new();
        let g = graph();
        let a = engine
            .layout_with_rng(&g, Strategy::Grid, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let b = engine.layout(&g, Strategy::Grid).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LayoutEngine>();
    }
}
