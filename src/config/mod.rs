use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::reports::{DEFAULT_RECENT_LIMIT, DEFAULT_REPORT_LIMIT},
    currency::CurrencyCode,
    errors::Result,
    utils::{files::write_atomic, paths},
};

/// User preferences for the command-line front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides where the key-value store lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Currency assumed for entries and budgets when none is given.
    pub default_currency: CurrencyCode,
    pub recent_limit: usize,
    pub report_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_currency: CurrencyCode::Usd,
            recent_limit: DEFAULT_RECENT_LIMIT,
            report_limit: DEFAULT_REPORT_LIMIT,
        }
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    /// Directory backing the ledger store for `config`.
    pub fn store_dir(&self, config: &Config) -> PathBuf {
        config
            .data_dir
            .clone()
            .unwrap_or_else(|| paths::store_dir_in(&self.base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
