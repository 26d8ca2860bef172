use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::{ForestSource, SourceError};
use crate::models::validate_forest;
use crate::tree::{node_count, TreeNode};

/// Forest stored as a JSON array of nodes with nested `children`
pub struct JsonFileSource<N> {
    path: PathBuf,
    _node: PhantomData<fn() -> N>,
}

impl<N> JsonFileSource<N> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _node: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse and validate a forest from JSON text
pub fn parse_forest<N>(contents: &str) -> Result<Vec<N>, SourceError>
where
    N: TreeNode + DeserializeOwned,
{
    let forest: Vec<N> = serde_json::from_str(contents)?;
    validate_forest(&forest)?;
    Ok(forest)
}

#[async_trait]
impl<N> ForestSource<N> for JsonFileSource<N>
where
    N: TreeNode + DeserializeOwned + Send,
{
    async fn list(&self) -> Result<Vec<N>, SourceError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::io(&self.path, e))?;

        let forest = parse_forest(&contents)?;
        tracing::info!(
            path = %self.path.display(),
            roots = forest.len(),
            nodes = node_count(&forest),
            "loaded forest"
        );
        Ok(forest)
    }
}
