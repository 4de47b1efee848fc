use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use taskrank_core::{BusinessCalendar, DEFAULT_SUGGEST_LIMIT, PriorityEngine, ScoringMode, Weights};

use crate::clock;
use crate::state::{default_config_path, ensure_taskrank_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarSection,
    #[serde(default)]
    pub scoring: ScoringSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSection {
    /// IANA timezone used to decide what "today" is.
    pub timezone: String,
    /// Dates that never count as business days.
    pub holidays: Vec<NaiveDate>,
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            timezone: "America/Chicago".to_string(),
            holidays: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSection {
    #[serde(deserialize_with = "lenient_mode")]
    pub default_mode: ScoringMode,
    pub suggest_limit: usize,
    /// Starting point for the adaptive weights. Feedback changes are not written back.
    pub initial_weights: Weights,
}

impl Default for ScoringSection {
    fn default() -> Self {
        Self {
            default_mode: ScoringMode::SmartBalance,
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
            initial_weights: Weights::default(),
        }
    }
}

fn lenient_mode<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<ScoringMode, D::Error> {
    let name = String::deserialize(d)?;
    Ok(ScoringMode::parse_lenient(&name))
}

impl Config {
    pub fn engine(&self) -> PriorityEngine {
        PriorityEngine::with_initial_weights(
            BusinessCalendar::with_holidays(self.calendar.holidays.iter().copied()),
            self.scoring.initial_weights,
        )
    }

    /// Mode from a CLI/session argument, falling back to the configured default.
    pub fn mode(&self, requested: Option<&str>) -> ScoringMode {
        requested.map_or(self.scoring.default_mode, ScoringMode::parse_lenient)
    }

    pub fn validate(&self) -> Result<()> {
        clock::parse_tz(&self.calendar.timezone).context("config [calendar].timezone")?;
        Ok(())
    }
}

pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(explicit: Option<&Path>) -> Result<()> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => ensure_taskrank_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&p, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
