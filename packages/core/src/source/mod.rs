//! Data Sources
//!
//! Upstream collaborators that supply the initial forest for a view. The tree
//! algorithms stay synchronous; loading is the only async boundary.
//!
//! - [`MockForestSource`] - in-memory forest, optionally with simulated latency
//! - [`JsonFileSource`] - JSON array file, validated on load
//! - [`fixtures`] - built-in sample departments and menus

pub mod error;
pub mod fixtures;
mod json_file;
mod mock;

pub use error::SourceError;
pub use json_file::{parse_forest, JsonFileSource};
pub use mock::MockForestSource;

use async_trait::async_trait;

/// Supplies a forest of `N`
#[async_trait]
pub trait ForestSource<N: Send>: Send + Sync {
    /// Fetch the full forest
    async fn list(&self) -> Result<Vec<N>, SourceError>;
}
