use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_DB_PATH: &str = "stego_history.db";
const DEFAULT_RECORD_HISTORY: bool = true;
const DEFAULT_LIST_LIMIT: usize = 50;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ScanConfigFile {
    db_path: Option<String>,
    history: Option<HistoryConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct HistoryConfigFile {
    record: Option<bool>,
    list_limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub db_path: String,
    pub history: HistorySettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySettings {
    /// Append every successful scan to the history store.
    pub record: bool,
    /// Default number of rows shown by `stego_history list`.
    pub list_limit: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            history: HistorySettings {
                record: DEFAULT_RECORD_HISTORY,
                list_limit: DEFAULT_LIST_LIMIT,
            },
        }
    }
}

impl ScanConfig {
    /// File named by `STEGO_CONFIG` (optional), then environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("STEGO_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) if !path.trim().is_empty() => read_config_file(Path::new(path))?,
            _ => ScanConfigFile::default(),
        };
        let mut cfg = Self::from_file(file_cfg);
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: ScanConfigFile) -> Self {
        let db_path = file.db_path.unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let history = HistorySettings {
            record: file
                .history
                .as_ref()
                .and_then(|history| history.record)
                .unwrap_or(DEFAULT_RECORD_HISTORY),
            list_limit: file
                .history
                .as_ref()
                .and_then(|history| history.list_limit)
                .unwrap_or(DEFAULT_LIST_LIMIT),
        };
        Self { db_path, history }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(path) = std::env::var("STEGO_DB_PATH") {
            if !path.trim().is_empty() {
                self.db_path = path;
            }
        }
        if let Ok(record) = std::env::var("STEGO_RECORD_HISTORY") {
            self.history.record = parse_bool(&record)
                .ok_or_else(|| anyhow!("STEGO_RECORD_HISTORY must be true/false or 1/0"))?;
        }
        if let Ok(limit) = std::env::var("STEGO_HISTORY_LIMIT") {
            self.history.list_limit = limit
                .trim()
                .parse()
                .map_err(|_| anyhow!("STEGO_HISTORY_LIMIT must be a positive integer"))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.db_path.trim().is_empty() {
            return Err(anyhow!("db_path must not be empty"));
        }
        if self.history.list_limit == 0 {
            return Err(anyhow!("history list_limit must be greater than zero"));
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<ScanConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let cfg = toml::from_str(&raw)
        .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?;
    Ok(cfg)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
