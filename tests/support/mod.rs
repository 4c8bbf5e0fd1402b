#![allow(dead_code)]

use anyhow::{Context, Result};
use seedroute::{CatalogRepository, MergePolicy};
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

pub fn bundled() -> CatalogRepository {
    CatalogRepository::bundled(MergePolicy::default()).expect("bundled catalog builds")
}

/// Minimal catalog document with the given season category arrays.
pub fn catalog_doc(winter: Value, spring: Value) -> Value {
    json!({
        "schema_version": "seed_catalog_v1",
        "site": {"name": "Fixture Seeds"},
        "seasons": {"winter": winter, "spring": spring}
    })
}

pub fn category(id: &str, title: &str, varieties: Value) -> Value {
    json!({"id": id, "title": title, "varieties": varieties})
}

pub fn variety(name: &str) -> Value {
    json!({
        "name": name,
        "agronomic": [format!("{name} agronomic")],
        "disease": [format!("{name} disease")]
    })
}

pub fn write_catalog(doc: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    serde_json::to_writer(&mut file, doc)?;
    file.flush()?;
    Ok(file)
}

pub fn seedroute_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_seedroute"))
}

/// Run the CLI with `args`, feeding `input` on stdin. Logging env is cleared
/// so stderr only carries errors.
pub fn run_seedroute(args: &[&str], input: &str) -> Result<Output> {
    let mut child = Command::new(seedroute_bin())
        .args(args)
        .env_remove("SEEDROUTE_CATALOG")
        .env_remove("SEEDROUTE_MERGE_POLICY")
        .env_remove("SEEDROUTE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn seedroute")?;
    child
        .stdin
        .take()
        .context("stdin not captured")?
        .write_all(input.as_bytes())?;
    child.wait_with_output().context("failed to wait for seedroute")
}

pub fn json_lines(stdout: &[u8]) -> Result<Vec<Value>> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).with_context(|| format!("parsing {line}")))
        .collect()
}
