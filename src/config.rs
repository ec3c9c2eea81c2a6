//! Configuration module for DataShare.

use serde::Deserialize;
use std::path::Path;

use crate::{DataShareError, Result};

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whether to serve the bundled web client.
    #[serde(default = "default_serve_static")]
    pub serve_static: bool,
    /// Path to the static files directory.
    #[serde(default = "default_static_path")]
    pub static_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_serve_static() -> bool {
    true
}

fn default_static_path() -> String {
    "static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            serve_static: default_serve_static(),
            static_path: default_static_path(),
        }
    }
}

/// Bot transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Whether the bot transport is enabled.
    #[serde(default = "default_bot_enabled")]
    pub enabled: bool,
    /// Bot API token (must be set if enabled).
    #[serde(default)]
    pub token: String,
    /// Base URL of the bot platform API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Public URL the platform delivers webhook updates to.
    ///
    /// The webhook path `/bot/webhook` is appended on registration.
    #[serde(default)]
    pub webhook_url: String,
}

fn default_bot_enabled() -> bool {
    true
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            enabled: default_bot_enabled(),
            token: String::new(),
            api_base: default_api_base(),
            webhook_url: String::new(),
        }
    }
}

/// Relay tuning configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Chunk size in bytes for files re-chunked onto the stream transport.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    262_144
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file (console-only when unset).
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Web server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Bot transport configuration.
    #[serde(default)]
    pub bot: BotConfig,
    /// Relay tuning.
    #[serde(default)]
    pub relay: RelayConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(DataShareError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| DataShareError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TELEGRAM_BOT_TOKEN`: Override the bot API token
    /// - `WEBHOOK_URL`: Override the public webhook URL
    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
            if !token.is_empty() {
                self.bot.token = token;
            }
        }
        if let Ok(url) = std::env::var("WEBHOOK_URL") {
            if !url.is_empty() {
                self.bot.webhook_url = url;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the relay chunk size is zero. A missing bot
    /// token is not an error: the process runs with the bot transport
    /// uninitialized and the webhook answering service-unavailable.
    pub fn validate(&self) -> Result<()> {
        if self.relay.chunk_size == 0 {
            return Err(DataShareError::Validation(
                "relay chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the bot transport can be initialized.
    pub fn bot_ready(&self) -> bool {
        self.bot.enabled && !self.bot.token.is_empty()
    }
}
