use crate::domain::{HealthStatus, ReviewError, ReviewRequest, ReviewResult};
use async_trait::async_trait;

/// One round trip to the analysis service per call. Implementations never retry.
#[async_trait]
pub trait ReviewTransport: Send + Sync {
    async fn analyze(&self, request: &ReviewRequest) -> Result<ReviewResult, ReviewError>;

    /// Never fails: an unreachable service reports [`HealthStatus::offline`].
    async fn health(&self) -> HealthStatus;
}
