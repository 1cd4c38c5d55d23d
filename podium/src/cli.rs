// podium/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "podium")]
#[command(about = "Data Quality Validation & Enrichment Engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Runs the ingestion pipeline (Profile -> Rules -> Score -> Enrich)
    Run {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Ingest only a specific dataset kind (ex: "medals")
        #[arg(long, short)]
        select: Option<String>,

        /// Exit with an error when any dataset misses its thresholds
        #[arg(long)]
        strict: bool,
    },

    /// 🔎 Validates configuration and rule book without touching data
    Check {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🧹 Cleans build artifacts (target/ folder)
    Clean {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}
