// podium-core/src/domain/dataset.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// The closed set of dataset kinds this pipeline ingests.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Athletes,
    Medals,
    Teams,
    Coaches,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Athletes,
        DatasetKind::Medals,
        DatasetKind::Teams,
        DatasetKind::Coaches,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Athletes => "athletes",
            DatasetKind::Medals => "medals",
            DatasetKind::Teams => "teams",
            DatasetKind::Coaches => "coaches",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "athletes" => Ok(DatasetKind::Athletes),
            "medals" => Ok(DatasetKind::Medals),
            "teams" => Ok(DatasetKind::Teams),
            "coaches" => Ok(DatasetKind::Coaches),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

/// Semantic column types. Comparison is by declared type only;
/// rule evaluation never samples individual cell values.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Double,
    Boolean,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Double => "double",
            FieldType::Boolean => "boolean",
        };
        f.write_str(s)
    }
}

impl FieldType {
    /// Type checks accept integer columns where a double is declared
    /// (CSV inference often reads whole-number columns as integers).
    pub fn accepts(&self, actual: FieldType) -> bool {
        *self == actual || (*self == FieldType::Double && actual == FieldType::Integer)
    }
}

// Simple struct describing a column (independent of the engine)
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: FieldType,
}

/// One immutable snapshot of a tabular dataset, owned by a single
/// validation run. The core only ever sees its schema and row count;
/// rows stay behind the `DatasetSource` port.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub kind: DatasetKind,
    pub columns: Vec<ColumnSchema>,
    pub row_count: u64,
}

impl Dataset {
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}

/// A validated dataset plus its ingestion provenance. Always a new value:
/// the input dataset is never mutated in place, which keeps replays safe.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedDataset {
    pub dataset_name: String,
    /// Point in time of enrichment, not of original data collection.
    pub ingestion_timestamp: chrono::DateTime<chrono::Utc>,
    pub environment: String,
    pub accepted: bool,
    pub score: crate::domain::scoring::QualityScore,
    pub dataset: Dataset,
}
