// podium-core/src/domain/profile.rs

use serde::{Deserialize, Serialize};

/// Per-column profiling result.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ColumnProfile {
    pub column: String,
    pub null_count: u64,
    /// `(row_count - null_count) / row_count`.
    ///
    /// By convention this is **1.0 when row_count = 0**: an empty dataset
    /// gives no evidence of incompleteness, and the convention avoids a
    /// division by zero. This is a deliberate business rule, not an
    /// accident — change it only together with the scoring tests.
    pub completeness: f64,
}

impl ColumnProfile {
    pub fn new(column: impl Into<String>, row_count: u64, null_count: u64) -> Self {
        Self {
            column: column.into(),
            null_count,
            completeness: completeness_ratio(row_count, null_count),
        }
    }
}

/// See [`ColumnProfile::completeness`] for the zero-row convention.
pub fn completeness_ratio(row_count: u64, null_count: u64) -> f64 {
    if row_count == 0 {
        return 1.0;
    }
    (row_count.saturating_sub(null_count)) as f64 / row_count as f64
}

/// Dataset-level profiling output: one profile per column plus the
/// exact duplicate-row count (all columns equal).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DatasetProfile {
    pub row_count: u64,
    pub columns: Vec<ColumnProfile>,
    pub duplicate_rows: u64,
}

impl DatasetProfile {
    /// Worst-column completeness (conservative). 1.0 for a dataset with
    /// zero columns — vacuously complete.
    pub fn min_completeness(&self) -> f64 {
        self.columns
            .iter()
            .map(|c| c.completeness)
            .fold(1.0, f64::min)
    }
}
