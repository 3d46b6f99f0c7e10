//! Configuration handling for the lookup client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default ViaCEP endpoint
const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Default per-request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User configuration for the postal-code lookup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LookupConfig {
    /// Directory service base URL
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl LookupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br", "cadastro", "cadastro-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: LookupConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Effective base URL: environment override, then configured value,
    /// then the public ViaCEP endpoint
    pub fn base_url(&self) -> String {
        resolve_base_url(std::env::var("VIACEP_BASE_URL").ok(), self.base_url.as_deref())
    }

    /// Effective request timeout
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

fn resolve_base_url(env_override: Option<String>, configured: Option<&str>) -> String {
    env_override
        .filter(|url| !url.is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
