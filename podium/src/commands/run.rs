// podium/src/commands/run.rs
//
// USE CASE: Run the ingestion pipeline.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use podium_core::application::run_ingestion;
use podium_core::domain::dataset::DatasetKind;
use podium_core::infrastructure::adapters::{DataFusionSource, LocalStore};
use podium_core::infrastructure::config::load_project_config;

pub async fn execute(
    project_dir: PathBuf,
    select: Option<String>,
    strict: bool,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_project_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    println!("   Project: {} (v{})", config.name, config.version);
    println!("   Environment: {}", config.environment);

    // B. Resolve the dataset selection
    let kinds: Vec<DatasetKind> = match &select {
        Some(name) => vec![DatasetKind::from_str(name)?],
        None => config.datasets.clone(),
    };

    // C. Instantiate the adapters (dependency injection happens here)
    let data_dir = project_dir.join(&config.data_path);
    let source = DataFusionSource::from_data_dir(&data_dir, &kinds)
        .await
        .with_context(|| format!("Failed to register data sources under {:?}", data_dir))?;
    let target_dir = project_dir.join(&config.target_path);
    let sink = LocalStore::new(&target_dir)
        .with_context(|| format!("Failed to initialize local store at {:?}", target_dir))?;

    // D. Run the Pipeline (Application Layer)
    let result = run_ingestion(
        &source,
        &sink,
        &config.rules,
        &config.thresholds,
        &config.environment,
        &kinds,
    )
    .await;

    match result {
        Ok(run_res) => {
            if !run_res.flagged.is_empty() && strict {
                eprintln!(
                    "\n❌ FAILURE (strict). Flagged datasets: {:?}",
                    run_res.flagged
                );
                std::process::exit(1);
            }
            println!(
                "\n✨ SUCCESS! {} datasets ingested in {:.2?}",
                run_res.datasets_processed,
                start.elapsed()
            );
        }
        Err(e) => {
            eprintln!("\n💥 CRITICAL PIPELINE ERROR: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
