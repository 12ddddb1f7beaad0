use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn advisory_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".crop-advisory"))
}

pub fn ensure_advisory_home() -> Result<PathBuf> {
    let dir = advisory_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
