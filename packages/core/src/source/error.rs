//! Data Source Error Types

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ValidationError;

/// Errors raised while loading a forest from a data source
#[derive(Error, Debug)]
pub enum SourceError {
    /// Reading the backing file failed
    #[error("Failed to read forest from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not a JSON array of nodes
    #[error("Failed to parse forest: {0}")]
    Parse(#[from] serde_json::Error),

    /// Loaded forest breaks the id invariants
    #[error("Invalid forest: {0}")]
    Validation(#[from] ValidationError),
}

impl SourceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
