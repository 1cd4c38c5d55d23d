// podium-core/src/ports/source.rs

// This file defines what the core needs from the tabular engine, without
// knowing how it is done. The core issues logical aggregate requests
// (count nulls, count distinct rows, min length...); it never assumes an
// in-memory representation of all rows.

use async_trait::async_trait;

use crate::domain::dataset::{Dataset, DatasetKind};
use crate::error::PodiumError;

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Load the immutable snapshot (schema + row count) for one kind.
    async fn load(&self, kind: DatasetKind) -> Result<Dataset, PodiumError>;

    async fn total_rows(&self, dataset: &Dataset) -> Result<u64, PodiumError>;

    /// Number of null cells in one column.
    async fn count_nulls(&self, dataset: &Dataset, column: &str) -> Result<u64, PodiumError>;

    /// Number of rows left after removing exact duplicates (all columns equal).
    async fn count_distinct_rows(&self, dataset: &Dataset) -> Result<u64, PodiumError>;

    /// Minimum string length across a column; None when the column holds
    /// no non-null values.
    async fn min_string_length(
        &self,
        dataset: &Dataset,
        column: &str,
    ) -> Result<Option<u64>, PodiumError>;

    /// Minimum value across a numeric column; None when empty.
    async fn min_numeric(
        &self,
        dataset: &Dataset,
        column: &str,
    ) -> Result<Option<f64>, PodiumError>;

    /// Distinct non-null values of a column, rendered as strings.
    /// Used for reference-set and pattern constraints.
    async fn distinct_values(
        &self,
        dataset: &Dataset,
        column: &str,
    ) -> Result<Vec<String>, PodiumError>;
}
