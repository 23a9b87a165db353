//! Application configuration
//!
//! Loaded once at startup and passed explicitly to whoever needs it. Sources, in
//! increasing priority: built-in defaults, an optional JSON file, environment
//! variables (a `.env` file is read by `main` before this runs).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AppError;

pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_BASE_URL: &str = "LLM_BASE_URL";
pub const ENV_MODEL: &str = "LLM_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "LLM_TIMEOUT_SECS";
pub const ENV_HOST: &str = "SERVER_HOST";
pub const ENV_PORT: &str = "SERVER_PORT";
pub const ENV_CORS_ORIGINS: &str = "CORS_ORIGINS";
pub const ENV_CONFIG_PATH: &str = "CONFIG_PATH";

/// Default config file: `config.json` next to the executable
fn get_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bearer token for the LLM API; never serialized
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// LLM API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api".to_string()
}

fn default_model() -> String {
    "mistralai/mistral-7b-instruct:free".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl AppConfig {
    /// Load from the config file (if any) and the process environment
    pub fn load() -> Result<Self, AppError> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| get_config_path());

        load_config_from_file(&path)?
            .unwrap_or_default()
            .apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the environment, in production)
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.model = model;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_number(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(raw) = lookup(ENV_PORT) {
            self.port = parse_number(ENV_PORT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CORS_ORIGINS) {
            self.cors_origins = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        // blank keys count as missing
        self.api_key = self
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if self.timeout_secs == 0 {
            return Err(AppError::Config(format!(
                "{} must be greater than zero",
                ENV_TIMEOUT_SECS
            )));
        }

        Ok(self)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read the config file; a missing file is not an error, a broken one is
fn load_config_from_file(path: &Path) -> Result<Option<AppConfig>, AppError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} is not a valid number: {:?}", key, raw)))
}

/// Mask a key for logs: first and last four characters only
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
