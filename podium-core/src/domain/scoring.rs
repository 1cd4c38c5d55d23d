// podium-core/src/domain/scoring.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::profile::DatasetProfile;
use crate::domain::rules::RuleVerdict;

/// Minimum acceptable values for the three quality metrics.
/// All three must be met; there is no weighted or partial-credit scoring.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, Copy, PartialEq)]
pub struct Thresholds {
    #[validate(range(min = 0.0, max = 1.0))]
    pub completeness: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub accuracy: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub consistency: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            completeness: 0.95,
            accuracy: 0.90,
            consistency: 0.85,
        }
    }
}

/// Per-dataset quality aggregate. All metrics live in [0, 1].
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct QualityScore {
    pub completeness: f64,
    pub accuracy: f64,
    pub consistency: f64,
    pub overall_pass: bool,
}

pub struct QualityScorer;

impl QualityScorer {
    /// Pure scoring function: profile + verdicts + thresholds -> score.
    ///
    /// Vacuous conventions (deliberate, tested):
    /// - zero verdicts => accuracy = 1.0,
    /// - zero rows => consistency = 1.0 (and completeness = 1.0 via the
    ///   profile's zero-row convention),
    /// - zero columns => completeness = 1.0.
    pub fn score(
        profile: &DatasetProfile,
        verdicts: &[RuleVerdict],
        thresholds: &Thresholds,
    ) -> QualityScore {
        let completeness = profile.min_completeness();

        let accuracy = if verdicts.is_empty() {
            1.0
        } else {
            let passed = verdicts.iter().filter(|v| v.passed).count();
            passed as f64 / verdicts.len() as f64
        };

        let consistency = if profile.row_count == 0 {
            1.0
        } else {
            (1.0 - profile.duplicate_rows as f64 / profile.row_count as f64).clamp(0.0, 1.0)
        };

        let overall_pass = completeness >= thresholds.completeness
            && accuracy >= thresholds.accuracy
            && consistency >= thresholds.consistency;

        QualityScore {
            completeness,
            accuracy,
            consistency,
            overall_pass,
        }
    }
}
