//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/geo-history/config.toml

pub mod defaults;

use crate::constants::api::GROQ_API_URL;
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Round content provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// API keys for various services
    #[serde(default)]
    pub api_keys: ApiKeysConfig,
}

/// Round content provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider backend: groq, remote or fixed
    #[serde(default = "default_provider")]
    pub backend: String,

    /// LLM model name
    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Completion token cap
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Rounds file for the fixed provider (empty = built-in sample)
    #[serde(default)]
    pub rounds_file: String,

    /// Base URL of a geo-history server for the remote provider
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// API keys for external services
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeysConfig {
    /// Groq API key
    #[serde(default)]
    pub groq: String,
}

// Default value functions for serde
fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_api_url() -> String {
    GROQ_API_URL.to_string()
}
fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}
fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}
fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: default_provider(),
            model: default_model(),
            api_url: default_api_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            rounds_file: String::new(),
            server_url: default_server_url(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path()?)
    }

    /// Load configuration from a specific path
    ///
    /// Creates default config at `path` if the file doesn't exist
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["provider", "backend"] => Some(self.provider.backend.clone()),
            ["provider", "model"] => Some(self.provider.model.clone()),
            ["provider", "api_url"] => Some(self.provider.api_url.clone()),
            ["provider", "temperature"] => Some(self.provider.temperature.to_string()),
            ["provider", "max_tokens"] => Some(self.provider.max_tokens.to_string()),
            ["provider", "rounds_file"] => Some(self.provider.rounds_file.clone()),
            ["provider", "server_url"] => Some(self.provider.server_url.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["api_keys", "groq"] => Some(self.api_keys.groq.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["provider", "backend"] => {
                self.provider.backend = value.to_string();
            }
            ["provider", "model"] => {
                self.provider.model = value.to_string();
            }
            ["provider", "api_url"] => {
                self.provider.api_url = value.to_string();
            }
            ["provider", "temperature"] => {
                self.provider.temperature = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid temperature value: {}", value))
                })?;
            }
            ["provider", "max_tokens"] => {
                self.provider.max_tokens = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid max_tokens value: {}", value))
                })?;
            }
            ["provider", "rounds_file"] => {
                self.provider.rounds_file = value.to_string();
            }
            ["provider", "server_url"] => {
                self.provider.server_url = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            ["api_keys", "groq"] => {
                self.api_keys.groq = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "provider.backend",
            "provider.model",
            "provider.api_url",
            "provider.temperature",
            "provider.max_tokens",
            "provider.rounds_file",
            "provider.server_url",
            "server.host",
            "server.port",
            "api_keys.groq",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
