//! Core error types for graph layout
//!
//! The layout engine is total over well-formed input, so this taxonomy is
//! small: it covers caller contract violations (unknown strategy names,
//! unusable configuration, duplicate node ids) and JSON conversion failures.

use thiserror::Error;

/// Errors raised by graph construction and layout dispatch
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid layout strategy: '{strategy}' (expected one of: {expected})")]
    InvalidStrategy { strategy: String, expected: String },

    #[error("Invalid layout configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("Unknown node category: {category}")]
    UnknownCategory { category: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl LayoutError {
    /// Create a new invalid strategy error listing the accepted names
    pub fn invalid_strategy(strategy: impl Into<String>) -> Self {
        Self::InvalidStrategy {
            strategy: strategy.into(),
            expected: crate::core::Strategy::variants().join(", "),
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new duplicate node error
    pub fn duplicate_node(id: impl Into<String>) -> Self {
        Self::DuplicateNode { id: id.into() }
    }

    /// Create a new unknown category error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, LayoutError>;
