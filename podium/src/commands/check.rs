// podium/src/commands/check.rs
//
// USE CASE: Validate configuration and rule book without reading data.

use std::path::PathBuf;

use podium_core::infrastructure::config::load_project_config;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    println!("🔎 Checking configuration in {:?}...", project_dir);

    // load_project_config validates thresholds and rule sets fail-fast
    let config = load_project_config(&project_dir)?;

    println!("   Project: {} (v{})", config.name, config.version);
    println!("   Environment: {}", config.environment);
    println!("   Datasets: {:?}", config.datasets);
    println!(
        "   Thresholds: completeness >= {}, accuracy >= {}, consistency >= {}",
        config.thresholds.completeness, config.thresholds.accuracy, config.thresholds.consistency
    );
    for (kind, ruleset) in &config.rules.rulesets {
        println!(
            "   Rules[{}]: {} required, {} typed, {} constraints",
            kind,
            ruleset.required_fields.len(),
            ruleset.data_types.len(),
            ruleset.constraints.len()
        );
    }

    println!("✅ Configuration is valid.");
    Ok(())
}
