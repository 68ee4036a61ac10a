//! People/organization network records
//!
//! These are the structured records the network view works with: people,
//! startups, and the relationships between them. [`NetworkData::to_graph`]
//! turns them into the [`Graph`](crate::core::Graph) the layout engine
//! consumes.

mod builder;
mod records;

pub use builder::*;
pub use records::*;
