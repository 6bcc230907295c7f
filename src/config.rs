//! Runtime settings: built-in defaults, optional TOML file, CLI overrides.
//!
//! - `default_config_path()` → ~/.ludecomp/config.toml
//! - `FileConfig::from_toml_file(path)` → parse user file (every key optional)
//! - `Settings::load(cli_path)` → defaults + file; CLI flags are applied after

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use tracing::warn;

use crate::io::input::{RandomRange, DEFAULT_RANDOM_MAX, DEFAULT_RANDOM_MIN};

pub const DEFAULT_CONSOLE_LIMIT: usize = 10;
pub const DEFAULT_PRECISION: usize = 4;
pub const DEFAULT_OUTPUT: &str = "lu_decomposition.txt";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

// ----- Config TOML -----

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub console_limit: Option<usize>,
    pub precision: Option<usize>,
    pub output: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub random_min: Option<f64>,
    pub random_max: Option<f64>,
}

impl FileConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Effective settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Largest n printed to the console; bigger results go to the file only.
    pub console_limit: usize,
    pub precision: usize,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub random: RandomRange,
    /// Print max |A - L·U| after a successful run.
    pub verify: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console_limit: DEFAULT_CONSOLE_LIMIT,
            precision: DEFAULT_PRECISION,
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: ReportFormat::Text,
            random: RandomRange::default(),
            verify: false,
        }
    }
}

impl Settings {
    pub fn apply_file(mut self, file: FileConfig) -> Result<Self> {
        if let Some(v) = file.console_limit { self.console_limit = v; }
        if let Some(v) = file.precision { self.precision = v; }
        if let Some(v) = file.output { self.output = v; }
        if let Some(v) = file.format { self.format = v; }
        if file.random_min.is_some() || file.random_max.is_some() {
            self.random = RandomRange::new(
                file.random_min.unwrap_or(DEFAULT_RANDOM_MIN),
                file.random_max.unwrap_or(DEFAULT_RANDOM_MAX),
            )
            .context("random_min / random_max in config")?;
        }
        Ok(self)
    }

    /// An explicit `--config` must load; the default location is optional and
    /// falls back to built-in settings with a warning when it is broken.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            let file = FileConfig::from_toml_file(p)?;
            return Self::default().apply_file(file);
        }
        if let Some(p) = default_config_path() {
            if p.exists() {
                match FileConfig::from_toml_file(&p).and_then(|f| Self::default().apply_file(f)) {
                    Ok(s) => return Ok(s),
                    Err(e) => warn!("failed loading {}: {e:#}; using defaults", p.display()),
                }
            }
        }
        Ok(Self::default())
    }
}

// ----- helpers for default path -----

/// ~/.ludecomp/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".ludecomp").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_keeps_defaults() {
        let s = Settings::default().apply_file(FileConfig::from_toml_str("").unwrap()).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = FileConfig::from_toml_str(
            r#"
            console_limit = 3
            precision = 2
            output = "out/lu.json"
            format = "json"
            random_min = 0.0
            "#,
        )
        .unwrap();
        let s = Settings::default().apply_file(file).unwrap();
        assert_eq!(s.console_limit, 3);
        assert_eq!(s.precision, 2);
        assert_eq!(s.output, PathBuf::from("out/lu.json"));
        assert_eq!(s.format, ReportFormat::Json);
        assert_eq!((s.random.min(), s.random.max()), (0.0, 10.0));
    }

    #[test]
    fn unknown_keys_and_bad_ranges_are_rejected() {
        assert!(FileConfig::from_toml_str("colour = 1").is_err());
        let file = FileConfig::from_toml_str("random_min = 5.0\nrandom_max = 1.0").unwrap();
        assert!(Settings::default().apply_file(file).is_err());
        let wide = FileConfig::from_toml_str("random_min = -1e308\nrandom_max = 1e308").unwrap();
        assert!(Settings::default().apply_file(wide).is_err());
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Some(dir.path().join("nope.toml"));
        assert!(Settings::load(&missing).is_err());

        let p = dir.path().join("cfg.toml");
        fs::write(&p, "console_limit = 1\n").unwrap();
        assert_eq!(Settings::load(&Some(p)).unwrap().console_limit, 1);
    }
}
