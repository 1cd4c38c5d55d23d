// podium-core/src/application/reporter.rs
//
// The reporter is the single shared mutable structure in the run: datasets
// are profiled and scored in parallel, so accumulation goes through one
// mutex-guarded map. Finalizing consumes the reporter, which makes the
// summary immutable by construction.

use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::error::DomainError;
use crate::domain::summary::{DatasetReport, IngestionSummary};

pub struct SummaryReporter {
    environment: String,
    entries: Mutex<BTreeMap<String, DatasetReport>>,
}

impl SummaryReporter {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Record one dataset. Recording the same name twice in a run is a
    /// usage error, fatal to the run.
    pub fn record(&self, name: &str, report: DatasetReport) -> Result<(), DomainError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| DomainError::ScoringError {
                dataset: name.to_string(),
                cause: "reporter lock poisoned".to_string(),
            })?;
        if entries.contains_key(name) {
            return Err(DomainError::DuplicateDataset(name.to_string()));
        }
        entries.insert(name.to_string(), report);
        Ok(())
    }

    /// Assemble the immutable run-level summary. Consumes the reporter so
    /// no entry can be added afterwards.
    pub fn finalize(self) -> IngestionSummary {
        let entries = self
            .entries
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        IngestionSummary {
            timestamp: Utc::now().to_rfc3339(),
            environment: self.environment,
            datasets: entries,
        }
    }
}
