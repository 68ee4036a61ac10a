//! Core abstractions for graph layout
//!
//! This module defines the graph model, the anchor and layout traits, the
//! configuration, and the error type shared by every strategy.

mod anchor;
mod config;
mod database;
mod error;
mod graph;
mod layout;
pub mod logging;
mod types;

pub use anchor::*;
pub use config::*;
pub use database::*;
pub use error::*;
pub use graph::*;
pub use layout::*;
pub use logging::*;
pub use types::*;
