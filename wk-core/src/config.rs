use anyhow::{Context, Result, bail};
use chrono::format::{Item, StrftimeItems};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::render::DEFAULT_DATE_FORMAT;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file holding every entry.
    pub db_path: PathBuf,
    /// Port of the web viewer (`wk serve`).
    pub port: u16,
    /// strftime pattern for day labels and the week caption. Default is `%b %-d` (`Feb 3`).
    pub date_format: String,
    /// Tracing filter used when `RUST_LOG` is not set (e.g. `wk=debug`).
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    db_path: Option<PathBuf>,
    port: Option<u16>,
    date_format: Option<String>,
    log_level: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply
    /// defaults. A missing file means defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            db_path: file_config.db_path.unwrap_or_else(Self::default_db_path),
            port: file_config.port.unwrap_or(DEFAULT_PORT),
            date_format: file_config
                .date_format
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            log_level: file_config.log_level,
        }
    }

    /// Default database: `{data_dir}/wk/week.db`
    /// - macOS:   `~/Library/Application Support/wk/week.db`
    /// - Linux:   `$XDG_DATA_HOME/wk/week.db` or `~/.local/share/wk/week.db`
    /// - Windows: `%APPDATA%\wk\week.db`
    fn default_db_path() -> PathBuf {
        let dir = match BaseDirs::new() {
            Some(base) => base.data_dir().join("wk"),
            None => PathBuf::from("./wk"),
        };
        dir.join("week.db")
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("wk").join("config.toml"));
            v.push(b.config_dir().join("wk").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        let file_config = toml::from_str::<FileConfig>(s)?;
        if let Some(fmt) = &file_config.date_format {
            if !is_valid_date_format(fmt) {
                bail!("invalid date_format: {fmt:?}");
            }
        }
        Ok(file_config)
    }
}

/// Whether chrono can format dates with `fmt` without failing.
pub fn is_valid_date_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}
