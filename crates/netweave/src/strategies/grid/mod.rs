//! Grid layout strategy
//!
//! Places nodes row by row into a square-ish grid recentred around the
//! origin. The anchor gets no special treatment here.

mod layout;

pub use layout::*;
