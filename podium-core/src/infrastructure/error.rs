// podium-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DataFusion Engine Error: {0}")]
    #[diagnostic(
        code(podium::infra::database::datafusion),
        help("An error occurred inside the query engine.")
    )]
    DataFusion(#[from] datafusion::error::DataFusionError),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- QUERY ENGINE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(podium::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(podium::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(podium::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Data file for dataset '{0}' not found at '{1}'")]
    #[diagnostic(
        code(podium::infra::data_missing),
        help("Every dataset listed in podium.yaml needs a CSV under the data path.")
    )]
    DataFileNotFound(String, String),
}

// Manual implementation for shortcuts (e.g. `?` operator on engine calls)
impl From<datafusion::error::DataFusionError> for InfrastructureError {
    fn from(err: datafusion::error::DataFusionError) -> Self {
        InfrastructureError::Database(DatabaseError::DataFusion(err))
    }
}
