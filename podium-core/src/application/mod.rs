// podium-core/src/application/mod.rs

pub mod clean;
pub mod enrichment;
pub mod evaluator;
pub mod pipeline;
pub mod profiler;
pub mod reporter;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use podium_core::application::{run_ingestion, ColumnProfiler, ...};`
// without knowing the internal file layout.

pub use clean::clean_project;
pub use enrichment::EnrichmentStage;
pub use evaluator::RuleEvaluator;
pub use pipeline::{run_ingestion, RunResult};
pub use profiler::ColumnProfiler;
pub use reporter::SummaryReporter;
