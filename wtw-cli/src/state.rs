use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$WTW_HOME`, or `~/.wtw`.
pub fn wtw_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("WTW_HOME") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".wtw"))
}

pub fn ensure_wtw_home() -> Result<PathBuf> {
    let dir = wtw_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
