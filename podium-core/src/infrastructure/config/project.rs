// podium-core/src/infrastructure/config/project.rs

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::dataset::DatasetKind;
use crate::domain::rules::RuleBook;
use crate::domain::scoring::Thresholds;
use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectConfig {
    pub name: String,
    pub version: String,

    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(rename = "data-path", default = "default_data_path")]
    pub data_path: String,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    #[serde(rename = "config-paths", default)]
    pub config_paths: Vec<String>,

    /// Dataset kinds ingested by a run, in no particular order.
    #[serde(default = "default_datasets")]
    pub datasets: Vec<DatasetKind>,

    #[serde(default)]
    pub thresholds: Thresholds,

    // Hydrated from the satellite rules.yml, not from the main file
    #[serde(default)]
    pub rules: RuleBook,
}

fn default_environment() -> String {
    "dev".to_string()
}
fn default_data_path() -> String {
    "data".to_string()
}
fn default_target_path() -> String {
    "target".to_string()
}
fn default_datasets() -> Vec<DatasetKind> {
    DatasetKind::ALL.to_vec()
}

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    // 1. Discover the main file
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. Base YAML
    let content = fs::read_to_string(&config_path).map_err(InfrastructureError::Io)?;
    let mut config: ProjectConfig = serde_yaml::from_str(&content).map_err(|e| {
        InfrastructureError::ConfigError(format!(
            "Failed to parse project config YAML at {:?}: {}",
            config_path, e
        ))
    })?;

    // 3. Satellite hydration (Fail-Secure: a corrupt fragment stops the run)
    if let Some(config_folder) = config.config_paths.first() {
        let config_dir = project_dir.join(config_folder);
        if config_dir.exists() {
            load_satellite_configs(&mut config, &config_dir)?;
        }
    }

    // 4. Environment variable overrides (layering pattern)
    // e.g. PODIUM_ENVIRONMENT=prod podium run
    apply_env_overrides(&mut config);

    // 5. Semantic validation: thresholds in [0,1], rule sets well-formed
    config
        .thresholds
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(format!("thresholds: {}", e)))?;
    config
        .rules
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["podium.yaml", "podium_project_conf.yaml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

/// Load a typed configuration fragment from a file.
fn load_fragment<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let content = fs::read_to_string(path).map_err(InfrastructureError::Io)?;
    serde_yaml::from_str(&content).map_err(|e| {
        InfrastructureError::ConfigError(format!("Failed to parse YAML fragment at {:?}: {}", path, e))
    })
}

fn load_satellite_configs(
    config: &mut ProjectConfig,
    config_dir: &Path,
) -> Result<(), InfrastructureError> {
    // Rule book, keyed by dataset kind
    let rules_path = config_dir.join("rules.yml");
    if rules_path.exists() {
        config.rules = load_fragment(&rules_path)?;
        info!("  ✅ Quality rule book loaded");
    }

    // Thresholds can also be split out
    let thresholds_path = config_dir.join("thresholds.yml");
    if thresholds_path.exists() {
        config.thresholds = load_fragment(&thresholds_path)?;
        info!("  🎯 Thresholds loaded");
    }

    Ok(())
}

fn apply_env_overrides(config: &mut ProjectConfig) {
    if let Ok(val) = std::env::var("PODIUM_ENVIRONMENT") {
        info!(old = ?config.environment, new = ?val, "Overriding environment via ENV");
        config.environment = val;
    }
    if let Ok(val) = std::env::var("PODIUM_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
}
