use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "situ.config.json";

/// Situ configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Edit log file, relative to the config directory
    #[serde(default = "default_log_path")]
    pub log_path: String,

    /// Baseline snapshot map file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_path: Option<String>,

    /// MCP endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_endpoint: Option<String>,
}

fn default_log_path() -> String {
    "situ-edits.json".to_string()
}

impl Config {
    /// Load config from a directory, defaults when none exists
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn log_file(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.log_path)
    }

    pub fn baseline_file(&self, cwd: &str) -> Option<PathBuf> {
        self.baseline_path
            .as_ref()
            .map(|path| PathBuf::from(cwd).join(path))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            baseline_path: None,
            mcp_endpoint: None,
        }
    }
}
