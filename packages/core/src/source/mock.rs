use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use super::{ForestSource, SourceError};

/// In-memory forest standing in for a backend
pub struct MockForestSource<N> {
    forest: Vec<N>,
    simulated_delay: Option<Duration>,
}

impl<N> MockForestSource<N> {
    pub fn new(forest: Vec<N>) -> Self {
        Self {
            forest,
            simulated_delay: None,
        }
    }

    /// Delay every `list` call, mimicking a network round trip
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay = Some(delay);
        self
    }
}

#[async_trait]
impl<N> ForestSource<N> for MockForestSource<N>
where
    N: Clone + Send + Sync,
{
    async fn list(&self) -> Result<Vec<N>, SourceError> {
        if let Some(delay) = self.simulated_delay {
            sleep(delay).await;
        }
        Ok(self.forest.clone())
    }
}
