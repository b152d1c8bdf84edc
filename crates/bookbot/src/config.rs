use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub catalog_path: PathBuf,
    pub intents_path: PathBuf,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl BotConfig {
    /// Validate config values, returning errors for clearly broken configurations.
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err("catalog_path must not be empty".into());
        }
        if self.intents_path.as_os_str().is_empty() {
            return Err("intents_path must not be empty".into());
        }
        if self.server.host.is_empty() {
            return Err("server.host must not be empty".into());
        }
        if self.server.port == 0 {
            return Err("server.port must be > 0".into());
        }
        Ok(())
    }

    /// Load config from a JSON file, falling back to defaults for missing fields.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/summaries.json"),
            intents_path: PathBuf::from("data/intents.csv"),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
        }
    }
}
