//! Grid placement

use tracing::{debug, span, Level};

use crate::core::{Database, Graph, GridConfig, LayoutAlgorithm, Placement, Point, Strategy};

/// Row-major grid with `ceil(sqrt(n))` columns
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    config: GridConfig,
}

/// A node's cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub column: usize,
    pub row: usize,
}

impl GridLayout {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of columns used for `count` nodes
    pub fn columns(count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let mut columns = (count as f64).sqrt().ceil() as usize;
        // Correct float rounding around perfect squares
        while columns * columns < count {
            columns += 1;
        }
        while columns > 1 && (columns - 1) * (columns - 1) >= count {
            columns -= 1;
        }
        columns
    }

    /// Cell of the node at `index` when laying out `count` nodes
    pub fn cell(index: usize, count: usize) -> GridCell {
        let columns = Self::columns(count).max(1);
        GridCell {
            column: index % columns,
            row: index / columns,
        }
    }

    fn position(&self, cell: GridCell, columns: usize) -> Point {
        Point::new(
            cell.column as f64 * self.config.cell_width - columns as f64 * self.config.column_offset,
            cell.row as f64 * self.config.cell_height - self.config.row_offset,
        )
    }
}

impl LayoutAlgorithm for GridLayout {
    fn layout(&self, graph: &Graph, _anchor: Option<&str>) -> Placement {
        let layout_span = span!(Level::INFO, "layout_grid", node_count = graph.node_count());
        let _enter = layout_span.enter();

        let count = graph.node_count();
        let columns = Self::columns(count);
        let positions: Vec<Point> = (0..count)
            .map(|index| self.position(Self::cell(index, count), columns))
            .collect();

        debug!(count, columns, "Grid placed");
        Placement::fixed(positions)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Grid
    }
}
