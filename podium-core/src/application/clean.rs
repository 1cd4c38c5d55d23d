// podium-core/src/application/clean.rs

use std::fs;
use std::path::Path;

use crate::error::PodiumError;
use crate::infrastructure::config::load_project_config;

/// Remove build artifacts (the configured target path).
pub fn clean_project(project_dir: &Path) -> Result<(), PodiumError> {
    let config = load_project_config(project_dir)?;
    let target_dir = project_dir.join(&config.target_path);

    if target_dir.exists() {
        fs::remove_dir_all(&target_dir)?;
        println!("🧹 Removed {}", target_dir.display());
    } else {
        println!("🧹 Nothing to clean ({} absent)", target_dir.display());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_clean_removes_target() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("podium.yaml"),
            "name: olympics\nversion: \"1.0\"\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("target/datasets")).unwrap();

        clean_project(dir.path()).unwrap();
        assert!(!dir.path().join("target").exists());
    }
}
