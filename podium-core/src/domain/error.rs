// podium-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Profiling failed for column '{column}': {cause}")]
    #[diagnostic(
        code(podium::domain::profiling),
        help("The dataset source could not supply statistics for this column.")
    )]
    ProfilingError { column: String, cause: String },

    #[error("Dataset '{0}' was already recorded in this run")]
    #[diagnostic(
        code(podium::domain::duplicate_dataset),
        help("Each dataset kind may be ingested exactly once per run.")
    )]
    DuplicateDataset(String),

    #[error("Scoring failed for dataset '{dataset}': {cause}")]
    #[diagnostic(code(podium::domain::scoring))]
    ScoringError { dataset: String, cause: String },

    #[error("Unknown dataset kind: '{0}'")]
    #[diagnostic(
        code(podium::domain::unknown_kind),
        help("Valid kinds: athletes, medals, teams, coaches.")
    )]
    UnknownKind(String),

    #[error("Invalid rule set for '{dataset}': {cause}")]
    #[diagnostic(
        code(podium::domain::ruleset),
        help("Every typed or constrained field must appear in required_fields or optional_fields.")
    )]
    RuleSetError { dataset: String, cause: String },
}
