//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::constants::api::GROQ_API_KEY_ENV;
use crate::error::{Error, Result};
use clap::Args;
use std::io::Write;
use std::path::Path;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "provider.backend")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    let path = Config::config_path()?;
    run_at(&args, &path, &mut std::io::stdout())
}

/// Run the config command against the config file at `path`
pub fn run_at<W: Write>(args: &ConfigArgs, path: &Path, out: &mut W) -> Result<()> {
    if args.path {
        writeln!(out, "{}", path.display())?;
        return Ok(());
    }

    if args.reset {
        Config::default().save_to(path)?;
        writeln!(out, "Configuration reset to defaults")?;
        return Ok(());
    }

    let mut config = Config::load_from(path.to_path_buf())?;

    match (&args.key, &args.value) {
        (None, None) => show_all_config(&config, out)?,

        (Some(key), None) => match config.get(key) {
            Some(value) => writeln!(out, "{}", value)?,
            None => {
                return Err(Error::Config(format!(
                    "Unknown config key: {} (available: {})",
                    key,
                    Config::available_keys().join(", ")
                )))
            }
        },

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save_to(path)?;
            writeln!(out, "{} = {}", key, value)?;
        }

        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()))
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "[provider]")?;
    writeln!(out, "backend = \"{}\"", config.provider.backend)?;
    writeln!(out, "model = \"{}\"", config.provider.model)?;
    writeln!(out, "api_url = \"{}\"", config.provider.api_url)?;
    writeln!(out, "temperature = {}", config.provider.temperature)?;
    writeln!(out, "max_tokens = {}", config.provider.max_tokens)?;
    writeln!(out, "rounds_file = \"{}\"", config.provider.rounds_file)?;
    writeln!(out, "server_url = \"{}\"", config.provider.server_url)?;
    writeln!(out)?;

    writeln!(out, "[server]")?;
    writeln!(out, "host = \"{}\"", config.server.host)?;
    writeln!(out, "port = {}", config.server.port)?;
    writeln!(out)?;

    writeln!(out, "[api_keys]")?;
    if config.api_keys.groq.is_empty() {
        writeln!(out, "groq = \"\" # not configured, ${} is used if set", GROQ_API_KEY_ENV)?;
    } else {
        writeln!(out, "groq = \"***\" # configured")?;
    }

    Ok(())
}
