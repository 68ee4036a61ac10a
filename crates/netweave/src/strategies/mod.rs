//! Layout strategy implementations
//!
//! Each strategy implements [`LayoutAlgorithm`](crate::core::LayoutAlgorithm);
//! the [`LayoutEngine`] picks one per call.

pub mod force;
pub mod grid;
pub mod orchestrator;
pub mod rings;

pub use force::*;
pub use grid::*;
pub use orchestrator::*;
pub use rings::*;
