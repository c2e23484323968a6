use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wtw_core::time::LOCAL_TIMEZONE;
use wtw_core::QueryStyle;
use wtw_remote::{DEFAULT_ADVICE_URL, DEFAULT_WEATHER_URL};

use crate::state::{ensure_wtw_home, wtw_home};

/// Which resolver answers the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Look up the embedded (or configured) answer table
    #[default]
    Table,
    /// Ask the advice service and scrape its answer page
    Remote,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub resolver: ResolverSection,
    pub weather: WeatherSection,
    pub clock: ClockSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSection {
    pub mode: Mode,
    /// Gzip JSON snapshot to use instead of the embedded one.
    pub table_path: Option<PathBuf>,
    pub advice_url: String,
    /// `short` sends `g=`, `long` sends `gender=`.
    pub query_style: QueryStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSection {
    pub provider_url: String,
    /// Used when `--location` is not given.
    pub default_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSection {
    /// IANA timezone for `--time current`, or "local".
    pub timezone: String,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            mode: Mode::Table,
            table_path: None,
            advice_url: DEFAULT_ADVICE_URL.to_string(),
            query_style: QueryStyle::Short,
        }
    }
}

impl Default for WeatherSection {
    fn default() -> Self {
        Self {
            provider_url: DEFAULT_WEATHER_URL.to_string(),
            default_location: None,
        }
    }
}

impl Default for ClockSection {
    fn default() -> Self {
        Self {
            timezone: LOCAL_TIMEZONE.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(wtw_home()?.join("config.toml"))
}

/// Missing file means defaults.
pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    read_config(&p)
}

pub fn read_config(p: &Path) -> Result<Config> {
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_wtw_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let p = save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config(cfg: &Config) -> Result<()> {
    print!("{}", toml::to_string_pretty(cfg).context("serialize config")?);
    Ok(())
}
