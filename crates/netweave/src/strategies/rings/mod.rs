//! Ring-based layout strategies
//!
//! Hierarchical, circular, and radial layouts all place nodes on concentric
//! circles around the origin, with the anchor (if any) at the centre. They
//! are deterministic: positions depend only on node order and categories.

mod circular;
mod hierarchical;
mod radial;

pub use circular::*;
pub use hierarchical::*;
pub use radial::*;

use std::f64::consts::TAU;

use crate::core::Point;

/// Spread `members` (indices into `positions`) evenly over a circle.
/// Member `i` of `n` sits at angle `2π·i/n`; an empty ring is a no-op.
fn place_ring(positions: &mut [Point], members: &[usize], radius: f64) {
    if members.is_empty() {
        return;
    }
    let step = TAU / members.len() as f64;
    for (i, &index) in members.iter().enumerate() {
        positions[index] = Point::on_circle(radius, step * i as f64);
    }
}
