use anyhow::{Context, Result};
use course_catalog::{CATALOG_PATH_ENV, SCHEMA_PATH_ENV};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// `catalog-check` with the catalog/schema env overrides cleared so the host
/// environment cannot leak into assertions.
pub fn catalog_check() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog-check"));
    cmd.env_remove(CATALOG_PATH_ENV)
        .env_remove(SCHEMA_PATH_ENV)
        .env_remove("COURSE_CATALOG_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

pub fn write_catalog(dir: &TempDir, name: &str, body: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn display(path: &Path) -> String {
    path.display().to_string()
}
