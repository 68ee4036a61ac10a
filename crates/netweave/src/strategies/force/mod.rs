//! Force-directed layout strategy
//!
//! Nodes repel each other like charged particles and edges pull their
//! endpoints together like springs. The simulation runs a fixed number of
//! relaxation steps with constant force parameters (no velocity, no
//! cooling), starting from random positions around the origin.

mod layout;

pub use layout::*;
