// podium-core/src/application/enrichment.rs

use chrono::Utc;

use crate::domain::dataset::{Dataset, EnrichedDataset};
use crate::domain::scoring::QualityScore;

pub struct EnrichmentStage;

impl EnrichmentStage {
    /// Tag a dataset (accepted or flagged) with provenance metadata.
    /// Side-effect free: produces a new enriched value, the original is
    /// left untouched.
    pub fn enrich(dataset: &Dataset, environment: &str, score: QualityScore) -> EnrichedDataset {
        EnrichedDataset {
            dataset_name: dataset.kind.to_string(),
            ingestion_timestamp: Utc::now(),
            environment: environment.to_string(),
            accepted: score.overall_pass,
            score,
            dataset: dataset.clone(),
        }
    }
}
