// podium-core/src/ports/sink.rs

use async_trait::async_trait;

use crate::domain::dataset::EnrichedDataset;
use crate::domain::summary::IngestionSummary;
use crate::error::PodiumError;

/// Persistence collaborator. Both calls are fire-and-report: a failure
/// surfaces as a fatal run error, never retried inside the core.
#[async_trait]
pub trait SummarySink: Send + Sync {
    async fn write_dataset(&self, enriched: &EnrichedDataset) -> Result<(), PodiumError>;

    async fn write_summary(&self, summary: &IngestionSummary) -> Result<(), PodiumError>;
}
