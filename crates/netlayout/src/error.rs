//! Error types for netlayout operations.
//!
//! [`NetLayoutError`] is the error returned by the public API. Records that
//! are merely malformed are not errors; they are dropped and reported as
//! diagnostics on the [`crate::LayoutReport`].

use std::io;

use thiserror::Error;

use netlayout_parser::error::TopologyError;

use crate::config::ConfigError;

/// Errors raised by the layout engine itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A connection refers to an entity that has no position.
    #[error("Connection endpoint `{0}` has no position")]
    UnknownEndpoint(String),
}

/// The main error type for netlayout operations.
#[derive(Debug, Error)]
pub enum NetLayoutError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl From<ConfigError> for NetLayoutError {
    fn from(err: ConfigError) -> Self {
        Self::Layout(LayoutError::Config(err))
    }
}
