use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use teloxide::types::ChatId;

use crate::dictionary::DEFAULT_DICTIONARY_API_URL;
use crate::joke::DEFAULT_JOKE_API_URL;

/// Environment variable that overrides `telegram_bot_token`.
pub const TOKEN_ENV_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    ReadFile { path: PathBuf, source: std::io::Error },
    /// Failed to parse JSON.
    ParseJson { path: PathBuf, source: serde_json::Error },
    /// Validation error.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFile { path, source } => {
                write!(f, "failed to read config file '{}': {}", path.display(), source)
            }
            Self::ParseJson { path, source } => {
                write!(f, "failed to parse config file '{}': {}", path.display(), source)
            }
            Self::Validation(msg) => write!(f, "config validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFile { source, .. } => Some(source),
            Self::ParseJson { source, .. } => Some(source),
            Self::Validation(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    /// May be left empty when TELEGRAM_BOT_TOKEN is set.
    #[serde(default)]
    telegram_bot_token: String,
    #[serde(default = "default_dictionary_api_url")]
    dictionary_api_url: String,
    #[serde(default = "default_joke_api_url")]
    joke_api_url: String,
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
    /// Chat that receives WARN/ERROR log lines.
    log_chat_id: Option<i64>,
    /// Directory for log files. Defaults to current directory.
    data_dir: Option<String>,
}

fn default_dictionary_api_url() -> String {
    DEFAULT_DICTIONARY_API_URL.to_string()
}

fn default_joke_api_url() -> String {
    DEFAULT_JOKE_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub dictionary_api_url: String,
    pub joke_api_url: String,
    pub request_timeout: Duration,
    pub log_chat_id: Option<ChatId>,
    /// Directory for state files (logs).
    pub data_dir: PathBuf,
}

impl Config {
    /// Load from `path`, letting `TELEGRAM_BOT_TOKEN` override the file's token.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let env_token = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty());
        Self::load_with_token(path, env_token)
    }

    pub fn load_with_token<P: AsRef<Path>>(
        path: P,
        token_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config_path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadFile { path: config_path.clone(), source: e })?;
        let file: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseJson { path: config_path.clone(), source: e })?;

        let telegram_bot_token = token_override.unwrap_or(file.telegram_bot_token);
        validate_token(&telegram_bot_token)?;
        validate_url("dictionary_api_url", &file.dictionary_api_url)?;
        validate_url("joke_api_url", &file.joke_api_url)?;
        if file.request_timeout_secs == 0 {
            return Err(ConfigError::Validation("request_timeout_secs must be greater than 0".into()));
        }

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            telegram_bot_token,
            dictionary_api_url: file.dictionary_api_url,
            joke_api_url: file.joke_api_url,
            request_timeout: Duration::from_secs(file.request_timeout_secs),
            log_chat_id: file.log_chat_id.map(ChatId),
            data_dir,
        })
    }
}

fn validate_token(token: &str) -> Result<(), ConfigError> {
    if token.is_empty() {
        return Err(ConfigError::Validation(format!(
            "telegram_bot_token is required (set it in the config file or {TOKEN_ENV_VAR})"
        )));
    }
    // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
    let token_parts: Vec<&str> = token.split(':').collect();
    if token_parts.len() != 2 || token_parts[0].parse::<u64>().is_err() || token_parts[1].is_empty() {
        return Err(ConfigError::Validation(
            "telegram_bot_token appears invalid (expected format: 123456789:ABCdefGHI...)".into(),
        ));
    }
    Ok(())
}

fn validate_url(key: &str, url: &str) -> Result<(), ConfigError> {
    if reqwest::Url::parse(url).is_err() || !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Validation(format!("{key} must be an http(s) URL, got '{url}'")));
    }
    Ok(())
}
