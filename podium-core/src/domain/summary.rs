// podium-core/src/domain/summary.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::scoring::QualityScore;

/// One summary line per ingested dataset.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct DatasetReport {
    pub record_count: u64,
    pub score: QualityScore,
}

/// Run-level aggregate, assembled exactly once per run by the reporter
/// and immutable afterwards. Partial summaries never reach the sink.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IngestionSummary {
    /// RFC 3339 timestamp of summary assembly.
    pub timestamp: String,
    pub environment: String,
    // BTreeMap keeps serialized output stable across runs
    pub datasets: BTreeMap<String, DatasetReport>,
}

impl IngestionSummary {
    pub fn all_passed(&self) -> bool {
        self.datasets.values().all(|d| d.score.overall_pass)
    }

    pub fn flagged(&self) -> Vec<&str> {
        self.datasets
            .iter()
            .filter(|(_, d)| !d.score.overall_pass)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn report(pass: bool) -> DatasetReport {
        DatasetReport {
            record_count: 10,
            score: QualityScore {
                completeness: 1.0,
                accuracy: 1.0,
                consistency: if pass { 1.0 } else { 0.5 },
                overall_pass: pass,
            },
        }
    }

    #[test]
    fn test_flagged_lists_failing_datasets() {
        let mut datasets = BTreeMap::new();
        datasets.insert("athletes".to_string(), report(true));
        datasets.insert("medals".to_string(), report(false));
        let summary = IngestionSummary {
            timestamp: "2024-08-01T00:00:00Z".into(),
            environment: "dev".into(),
            datasets,
        };
        assert!(!summary.all_passed());
        assert_eq!(summary.flagged(), vec!["medals"]);
    }

    #[test]
    fn test_summary_serializes_to_stable_json() {
        let mut datasets = BTreeMap::new();
        datasets.insert("teams".to_string(), report(true));
        let summary = IngestionSummary {
            timestamp: "2024-08-01T00:00:00Z".into(),
            environment: "prod".into(),
            datasets,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"environment\":\"prod\""));
        assert!(json.contains("\"overall_pass\":true"));
    }
}
