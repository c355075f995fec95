//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default round provider
pub const DEFAULT_PROVIDER: &str = "groq";

/// Default LLM model
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

/// Default completion token cap
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Default server URL for the remote provider
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:7879";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7879;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geo-history";
