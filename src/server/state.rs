//! Server shared state
//!
//! Holds configuration and the round provider for the HTTP server.

use crate::config::Config;
use crate::error::Result;
use crate::provider::{get_provider, AnyProvider, RoundProvider};
use std::time::Instant;

/// Shared state for the HTTP server
#[derive(Debug)]
pub struct AppState {
    /// Configuration the server was started with
    config: Config,

    /// Provider answering generate-round requests
    provider: AnyProvider,

    started: Instant,
}

impl AppState {
    /// Create application state with the provider named in `config`
    pub fn new(config: Config) -> Result<Self> {
        let provider = get_provider(&config, None)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Create application state around an already built provider
    pub fn with_provider(config: Config, provider: AnyProvider) -> Self {
        Self {
            config,
            provider,
            started: Instant::now(),
        }
    }

    /// Configuration the server was started with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The round provider
    pub fn provider(&self) -> &AnyProvider {
        &self.provider
    }

    /// Name of the round provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
