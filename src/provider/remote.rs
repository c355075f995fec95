//! Remote round provider
//!
//! Fetches rounds from a running `geo-history serve` instance, which holds
//! the LLM credentials.

use crate::constants::api::GENERATE_ROUND_PATH;
use crate::error::{Error, Result};
use crate::provider::{RoundProvider, RoundRequest};
use crate::quiz::GameRound;

/// Provider that calls the generate-round endpoint of a server
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteProvider {
    /// Create a provider for the server at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), GENERATE_ROUND_PATH),
        })
    }

    /// Full URL of the generate-round endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RoundProvider for RemoteProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn generate_round(&self, request: &RoundRequest) -> Result<GameRound> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Generation(format!("Server request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Generation(format!(
                "Failed to generate round (server returned {})",
                response.status()
            )));
        }

        let round: GameRound = response
            .json()
            .await
            .map_err(|e| Error::Generation(format!("Failed to parse round: {}", e)))?;
        round.validate()?;

        Ok(round)
    }
}
