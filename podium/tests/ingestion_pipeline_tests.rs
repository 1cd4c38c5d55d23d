// podium/tests/ingestion_pipeline_tests.rs

use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Abstraction for managing a scaffolded Podium project.
struct PodiumTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl PodiumTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();

        fs::write(
            root.join("podium.yaml"),
            r#"
name: olympics-ingest
version: "1.0"
environment: test
config-paths: [config]
datasets: [athletes, medals]
thresholds: {completeness: 0.9, accuracy: 0.9, consistency: 0.85}
"#,
        )?;

        fs::create_dir(root.join("config"))?;
        fs::write(
            root.join("config/rules.yml"),
            r#"
athletes:
  required_fields: [name, country]
  data_types:
    - { field: name, type: string }
  constraints:
    - name: name_min_length
      kind: min_length
      field: name
      value: 2
medals:
  required_fields: [country, gold]
  data_types:
    - { field: gold, type: integer }
  constraints:
    - name: medal_counts_non_negative
      kind: non_negative
      field: gold
"#,
        )?;

        fs::create_dir(root.join("data"))?;
        fs::write(
            root.join("data/athletes.csv"),
            "name,country\nTeddy,FRA\nSimone,USA\nNoah,USA\n",
        )?;
        fs::write(
            root.join("data/medals.csv"),
            "country,gold\nFRA,16\nUSA,40\nJPN,20\n",
        )?;

        Ok(Self { _tmp: tmp, root })
    }

    fn podium(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("podium"));
        cmd.current_dir(&self.root);
        cmd
    }

    fn summary(&self) -> Result<serde_json::Value> {
        let raw = fs::read_to_string(self.root.join("target/summary.json"))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[test]
fn test_run_produces_complete_summary() -> Result<()> {
    let env = PodiumTestEnv::new()?;

    env.podium()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS"));

    let summary = env.summary()?;
    assert_eq!(summary["environment"], "test");
    assert_eq!(summary["datasets"]["athletes"]["record_count"], 3);
    assert_eq!(summary["datasets"]["medals"]["record_count"], 3);
    assert_eq!(
        summary["datasets"]["athletes"]["score"]["overall_pass"],
        true
    );

    // enriched datasets were persisted alongside
    assert!(env.root.join("target/datasets/athletes.json").exists());
    assert!(env.root.join("target/datasets/medals.json").exists());
    Ok(())
}

#[test]
fn test_negative_medal_count_flags_dataset() -> Result<()> {
    let env = PodiumTestEnv::new()?;
    fs::write(
        env.root.join("data/medals.csv"),
        "country,gold\nFRA,16\nUSA,-1\n",
    )?;

    // without --strict the run still succeeds, the dataset is flagged
    env.podium().arg("run").assert().success();

    let summary = env.summary()?;
    assert_eq!(summary["datasets"]["medals"]["score"]["overall_pass"], false);

    // with --strict the flag becomes a CI failure
    env.podium()
        .arg("run")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("medals"));
    Ok(())
}

#[test]
fn test_missing_required_column_lowers_accuracy() -> Result<()> {
    let env = PodiumTestEnv::new()?;
    // drop the country column entirely
    fs::write(env.root.join("data/athletes.csv"), "name\nTeddy\nSimone\n")?;

    env.podium().arg("run").assert().success();

    let summary = env.summary()?;
    let accuracy = summary["datasets"]["athletes"]["score"]["accuracy"]
        .as_f64()
        .unwrap();
    assert!(accuracy < 1.0);
    assert_eq!(
        summary["datasets"]["athletes"]["score"]["overall_pass"],
        false
    );
    Ok(())
}

#[test]
fn test_duplicate_rows_lower_consistency() -> Result<()> {
    let env = PodiumTestEnv::new()?;
    fs::write(
        env.root.join("data/athletes.csv"),
        "name,country\nTeddy,FRA\nTeddy,FRA\nTeddy,FRA\nSimone,USA\n",
    )?;

    env.podium().arg("run").assert().success();

    let summary = env.summary()?;
    let consistency = summary["datasets"]["athletes"]["score"]["consistency"]
        .as_f64()
        .unwrap();
    // 2 duplicate rows out of 4 => 0.5, below the 0.85 threshold
    assert!((consistency - 0.5).abs() < 1e-9);
    assert_eq!(
        summary["datasets"]["athletes"]["score"]["overall_pass"],
        false
    );
    Ok(())
}

#[test]
fn test_select_runs_single_dataset() -> Result<()> {
    let env = PodiumTestEnv::new()?;

    env.podium()
        .arg("run")
        .arg("--select")
        .arg("medals")
        .assert()
        .success();

    let summary = env.summary()?;
    assert!(summary["datasets"].get("athletes").is_none());
    assert!(summary["datasets"].get("medals").is_some());
    Ok(())
}

#[test]
fn test_missing_data_file_is_a_fatal_run_error() -> Result<()> {
    let env = PodiumTestEnv::new()?;
    fs::remove_file(env.root.join("data/medals.csv"))?;

    env.podium().arg("run").assert().failure();
    assert!(!env.root.join("target/summary.json").exists());
    Ok(())
}

#[test]
fn test_check_validates_configuration() -> Result<()> {
    let env = PodiumTestEnv::new()?;

    env.podium()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    // corrupt the rule book: constraint on an undeclared field
    fs::write(
        env.root.join("config/rules.yml"),
        r#"
medals:
  required_fields: [country]
  constraints:
    - name: ghost
      kind: non_negative
      field: silver
"#,
    )?;

    env.podium().arg("check").assert().failure();
    Ok(())
}

#[test]
fn test_clean_removes_target() -> Result<()> {
    let env = PodiumTestEnv::new()?;

    env.podium().arg("run").assert().success();
    assert!(env.root.join("target").exists());

    env.podium().arg("clean").assert().success();
    assert!(!env.root.join("target").exists());
    Ok(())
}
