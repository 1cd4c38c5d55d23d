// podium-core/src/application/pipeline.rs

use futures::StreamExt;
use tracing::warn;

use crate::application::enrichment::EnrichmentStage;
use crate::application::evaluator::RuleEvaluator;
use crate::application::profiler::ColumnProfiler;
use crate::application::reporter::SummaryReporter;
use crate::domain::dataset::DatasetKind;
use crate::domain::rules::{RuleBook, RuleSet};
use crate::domain::scoring::{QualityScorer, Thresholds};
use crate::domain::summary::DatasetReport;
use crate::error::PodiumError;
use crate::ports::sink::SummarySink;
use crate::ports::source::DatasetSource;

// Bounded parallelism across dataset kinds
const MAX_CONCURRENT_DATASETS: usize = 4;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RunResult {
    pub success: bool,
    pub datasets_processed: usize,
    pub flagged: Vec<String>,
    pub errors: Vec<String>,
}

/// Validate, score, enrich and persist every dataset kind of a run.
///
/// Datasets are independent: each one is loaded, profiled and evaluated
/// concurrently (bounded), with profiler and evaluator joined before
/// scoring. The reporter is the only shared mutable structure. A run
/// either yields a complete summary covering every dataset (some possibly
/// flagged) or fails naming the datasets that could not be scored —
/// never a silent partial summary.
pub async fn run_ingestion(
    source: &dyn DatasetSource,
    sink: &dyn SummarySink,
    rulebook: &RuleBook,
    thresholds: &Thresholds,
    environment: &str,
    kinds: &[DatasetKind],
) -> Result<RunResult, PodiumError> {
    println!("🚀 Starting ingestion run ({} datasets)...", kinds.len());
    let start_time = std::time::Instant::now();

    let reporter = SummaryReporter::new(environment);
    let empty_ruleset = RuleSet::default();

    let tasks = kinds.iter().map(|&kind| {
        let reporter = &reporter;
        let empty_ruleset = &empty_ruleset;
        async move {
            let res = ingest_one(
                source,
                sink,
                reporter,
                rulebook.get(kind).unwrap_or(empty_ruleset),
                thresholds,
                environment,
                kind,
            )
            .await;
            (kind, res)
        }
    });

    let results: Vec<_> = futures::stream::iter(tasks)
        .buffer_unordered(MAX_CONCURRENT_DATASETS)
        .collect()
        .await;

    let mut flagged = Vec::new();
    let mut errors = Vec::new();
    let mut processed = 0;

    for (kind, res) in results {
        match res {
            Ok(accepted) => {
                processed += 1;
                if accepted {
                    println!("    ✅ {} accepted", kind);
                } else {
                    println!("    ⚠️  {} flagged (below thresholds)", kind);
                    flagged.push(kind.to_string());
                }
            }
            Err(e) => {
                eprintln!("    ❌ {} failed: {}", kind, e);
                errors.push(format!("{}: {}", kind, e));
            }
        }
    }

    // Fatal per-dataset errors: report which datasets failed and write
    // nothing — the sink never sees a partial summary.
    if !errors.is_empty() {
        warn!(failed = errors.len(), "run aborted before summary assembly");
        return Err(PodiumError::InternalError(format!(
            "{} dataset(s) failed to be profiled or scored: [{}]",
            errors.len(),
            errors.join("; ")
        )));
    }

    let summary = reporter.finalize();
    sink.write_summary(&summary).await?;

    println!(
        "✨ Done in {:.2}s. {} datasets summarized, {} flagged.",
        start_time.elapsed().as_secs_f64(),
        processed,
        flagged.len()
    );

    Ok(RunResult {
        success: true,
        datasets_processed: processed,
        flagged,
        errors,
    })
}

/// One dataset: load -> (profile || evaluate) -> score -> enrich -> persist.
/// Returns whether the dataset was accepted (overall_pass).
async fn ingest_one(
    source: &dyn DatasetSource,
    sink: &dyn SummarySink,
    reporter: &SummaryReporter,
    ruleset: &RuleSet,
    thresholds: &Thresholds,
    environment: &str,
    kind: DatasetKind,
) -> Result<bool, PodiumError> {
    let dataset = source.load(kind).await?;
    println!(
        "  🔹 {}: {} columns, {} rows",
        kind,
        dataset.columns.len(),
        dataset.row_count
    );

    // Profiler and evaluator read the same immutable snapshot and write
    // disjoint outputs; scoring is the join point.
    let (profile, verdicts) = tokio::join!(
        ColumnProfiler::profile(source, &dataset),
        RuleEvaluator::evaluate(source, &dataset, ruleset),
    );
    let profile = profile?;
    let verdicts = verdicts?;

    let score = QualityScorer::score(&profile, &verdicts, thresholds);

    let enriched = EnrichmentStage::enrich(&dataset, environment, score);
    sink.write_dataset(&enriched).await?;

    reporter.record(
        kind.as_str(),
        DatasetReport {
            record_count: dataset.row_count,
            score,
        },
    )?;

    Ok(score.overall_pass)
}
