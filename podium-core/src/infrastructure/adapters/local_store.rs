// podium-core/src/infrastructure/adapters/local_store.rs

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::dataset::EnrichedDataset;
use crate::domain::summary::IngestionSummary;
use crate::error::PodiumError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::sink::SummarySink;

/// Filesystem sink: enriched datasets under `<target>/datasets/`, the run
/// summary at `<target>/summary.json`. Writes are atomic so a crashed run
/// never leaves a half-written artifact behind.
pub struct LocalStore {
    target_dir: PathBuf,
}

impl LocalStore {
    pub fn new(target_dir: &Path) -> Result<Self, PodiumError> {
        if !target_dir.exists() {
            fs::create_dir_all(target_dir)?;
        }
        fs::create_dir_all(target_dir.join("datasets"))?;
        Ok(Self {
            target_dir: target_dir.to_path_buf(),
        })
    }

    fn save_json<T: serde::Serialize>(&self, path: &Path, data: &T) -> Result<(), PodiumError> {
        let content = serde_json::to_string_pretty(data)
            .map_err(|e| PodiumError::InternalError(format!("Serialization: {}", e)))?;
        atomic_write(path, content)?;
        Ok(())
    }
}

#[async_trait]
impl SummarySink for LocalStore {
    async fn write_dataset(&self, enriched: &EnrichedDataset) -> Result<(), PodiumError> {
        let path = self
            .target_dir
            .join("datasets")
            .join(format!("{}.json", enriched.dataset_name));
        self.save_json(&path, enriched)?;
        info!(dataset = %enriched.dataset_name, accepted = enriched.accepted, "Dataset persisted");
        Ok(())
    }

    async fn write_summary(&self, summary: &IngestionSummary) -> Result<(), PodiumError> {
        let path = self.target_dir.join("summary.json");
        self.save_json(&path, summary)?;
        info!(datasets = summary.datasets.len(), "Run summary persisted");
        Ok(())
    }
}
