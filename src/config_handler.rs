use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::log;

const DEFAULT_CONFIG_PATH: &str = "./config.json";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default="default_apis_url")]
    pub apis_url: String,
    #[serde(default="default_games_url")]
    pub games_url: String,
    #[serde(default="default_thumbnails_url")]
    pub thumbnails_url: String,

    #[serde(default="default_user_agent")]
    pub user_agent: String,

    #[serde(default="default_timeout_s")]
    pub timeout_s: u64,

    #[serde(default="default_thumbnail_size")]
    pub thumbnail_size: String,

    #[serde(default="default_report_dir")]
    pub report_dir: String,

    #[serde(default="default_description_limit")]
    pub description_limit: usize,
}

fn default_apis_url() -> String {
    "https://apis.roblox.com".to_string()
}

fn default_games_url() -> String {
    "https://games.roblox.com".to_string()
}

fn default_thumbnails_url() -> String {
    "https://thumbnails.roblox.com".to_string()
}

fn default_user_agent() -> String {
    "roblox-analyzer/1.0".to_string()
}

fn default_timeout_s() -> u64 {
    10
}

fn default_thumbnail_size() -> String {
    "150x150".to_string()
}

fn default_report_dir() -> String {
    ".".to_string()
}

fn default_description_limit() -> usize {
    400
}

impl Default for Config {
    fn default() -> Self {
        Config {
            apis_url: default_apis_url(),
            games_url: default_games_url(),
            thumbnails_url: default_thumbnails_url(),
            user_agent: default_user_agent(),
            timeout_s: default_timeout_s(),
            thumbnail_size: default_thumbnail_size(),
            report_dir: default_report_dir(),
            description_limit: default_description_limit(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_s)
    }

    /// Points every upstream host at the same base url.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.apis_url = url.to_string();
        self.games_url = url.to_string();
        self.thumbnails_url = url.to_string();
        self
    }
}

pub fn get_config() -> Result<Config> {
    let explicit = std::env::var("CONFIG_PATH").ok();
    let path = explicit.clone().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut result = if explicit.is_some() || Path::new(&path).exists() {
        read_config(&path)?
    } else {
        Config::default()
    };
    if let Ok(report_dir) = std::env::var("REPORT_DIR") {
        result.report_dir = report_dir;
        log::info!("[CONFIG] REPORT_DIR {}", result.report_dir);
    }
    log::debug!("[CONFIG] {:?}", result);
    Ok(result)
}

pub fn read_config(path: &str) -> Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Unable to read config at {path}"))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Could not parse JSON at {path}!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.apis_url, "https://apis.roblox.com");
        assert_eq!(config.games_url, "https://games.roblox.com");
        assert_eq!(config.thumbnails_url, "https://thumbnails.roblox.com");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.thumbnail_size, "150x150");
        assert_eq!(config.description_limit, 400);
    }

    #[test]
    fn test_read_config() {
        let dir = TempDir::new("config_test").unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"games_url": "http://localhost:9000", "timeout_s": 3}"#).unwrap();

        let config = read_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.games_url, "http://localhost:9000");
        assert_eq!(config.apis_url, "https://apis.roblox.com");
        assert_eq!(config.timeout_s, 3);
    }

    #[test]
    fn test_read_config_errors() {
        let dir = TempDir::new("config_test").unwrap();
        let missing = dir.path().join("missing.json");
        assert!(read_config(missing.to_str().unwrap()).is_err());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{not json").unwrap();
        let err = read_config(broken.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Could not parse JSON"));
    }

    #[test]
    fn test_with_base_url() {
        let config = Config::default().with_base_url("http://localhost:8101");
        assert_eq!(config.apis_url, "http://localhost:8101");
        assert_eq!(config.games_url, "http://localhost:8101");
        assert_eq!(config.thumbnails_url, "http://localhost:8101");
    }
}
