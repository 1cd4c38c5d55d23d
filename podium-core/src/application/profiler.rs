// podium-core/src/application/profiler.rs

use crate::domain::dataset::Dataset;
use crate::domain::error::DomainError;
use crate::domain::profile::{ColumnProfile, DatasetProfile};
use crate::error::PodiumError;
use crate::ports::source::DatasetSource;

/// Computes per-column completeness and the dataset-level duplicate-row
/// count. Pure over the source's aggregate answers: profiling the same
/// snapshot twice yields identical profiles.
pub struct ColumnProfiler;

impl ColumnProfiler {
    pub async fn profile(
        source: &dyn DatasetSource,
        dataset: &Dataset,
    ) -> Result<DatasetProfile, PodiumError> {
        // The source is the authority on the row count; the snapshot's
        // count is only a hint.
        let row_count = source
            .total_rows(dataset)
            .await
            .map_err(|e| DomainError::ProfilingError {
                column: "*".to_string(),
                cause: e.to_string(),
            })?;

        let mut columns = Vec::with_capacity(dataset.columns.len());

        for col in &dataset.columns {
            // An inaccessible column is a ProfilingError, never silently
            // reported as fully complete.
            let null_count = source
                .count_nulls(dataset, &col.name)
                .await
                .map_err(|e| DomainError::ProfilingError {
                    column: col.name.clone(),
                    cause: e.to_string(),
                })?;
            columns.push(ColumnProfile::new(&col.name, row_count, null_count));
        }

        // duplicates = total rows - rows left after exact deduplication
        let distinct = source
            .count_distinct_rows(dataset)
            .await
            .map_err(|e| DomainError::ProfilingError {
                column: "*".to_string(),
                cause: e.to_string(),
            })?;
        let duplicate_rows = row_count.saturating_sub(distinct);

        Ok(DatasetProfile {
            row_count,
            columns,
            duplicate_rows,
        })
    }
}
