use crate::dates::TimeContext;
use crate::error::{RemError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORE_FILENAME: &str = "reminders.json";

/// Configuration for remq, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemConfig {
    /// Snapshot file backing the store
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// `local`, `utc`, or a fixed offset such as `+02:00`
    #[serde(default)]
    pub timezone: Option<String>,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl RemConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RemError::Io)?;
        let config: RemConfig =
            serde_json::from_str(&content).map_err(RemError::Serialization)?;
        Ok(config)
    }

    /// The configured store file, or `reminders.json` in `data_dir`
    pub fn store_path_or(&self, data_dir: &Path) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| data_dir.join(DEFAULT_STORE_FILENAME))
    }

    pub fn time_context(&self) -> Result<TimeContext> {
        match &self.timezone {
            Some(tz) => tz.parse(),
            None => Ok(TimeContext::Local),
        }
    }
}
