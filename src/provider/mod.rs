//! Round content providers
//!
//! A provider turns a `RoundRequest` into a `GameRound`. The game asks for
//! three rounds in sequence; the first failure aborts the whole batch.
//!
//! ## Flex Point
//! Adding a new provider requires:
//! 1. Create `src/provider/{name}.rs` implementing `RoundProvider`
//! 2. Add a variant to `AnyProvider` and a match arm in `get_provider`

pub mod fixed;
pub mod groq;
pub mod remote;

use crate::config::Config;
use crate::constants::game::TOTAL_ROUNDS;
use crate::error::{Error, Result};
use crate::quiz::{Category, Difficulty, GameRound};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{info, warn};

/// Request for one round of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRequest {
    pub category: Category,
    pub difficulty: Difficulty,
    /// 1-based round number
    pub round_number: usize,
}

/// Trait for round content providers
pub trait RoundProvider: Send + Sync {
    /// Returns the provider name (e.g., "groq", "fixed")
    fn name(&self) -> &'static str;

    /// Produce the content for one round
    ///
    /// Implementations return rounds that already passed `GameRound::validate`.
    fn generate_round(
        &self,
        request: &RoundRequest,
    ) -> impl Future<Output = Result<GameRound>> + Send;
}

/// Information about a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub description: String,
}

/// Generate a full game's worth of rounds
///
/// Rounds are requested one at a time, tagged 1..=3. Any failure discards
/// the rounds fetched so far.
pub async fn generate_rounds<P: RoundProvider>(
    provider: &P,
    category: Category,
    difficulty: Difficulty,
) -> Result<Vec<GameRound>> {
    let mut rounds = Vec::with_capacity(TOTAL_ROUNDS);

    for round_number in 1..=TOTAL_ROUNDS {
        let request = RoundRequest {
            category,
            difficulty,
            round_number,
        };

        let round = provider.generate_round(&request).await.map_err(|e| {
            warn!(
                "Round {} from {} provider failed: {}",
                round_number,
                provider.name(),
                e
            );
            e
        })?;
        round.validate()?;

        info!(
            "Generated round {}/{}: {}",
            round_number, TOTAL_ROUNDS, round.location_question.answer
        );
        rounds.push(round);
    }

    Ok(rounds)
}

/// Parse model output into a validated round
///
/// The model is asked for bare JSON but often wraps it in prose or code
/// fences, so everything from the first `{` to the last `}` is parsed.
pub fn parse_round(content: &str) -> Result<GameRound> {
    if content.trim().is_empty() {
        return Err(Error::Generation("No content received".to_string()));
    }

    let json = match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => return Err(Error::Generation("No JSON found in response".to_string())),
    };

    let round: GameRound = serde_json::from_str(json)
        .map_err(|e| Error::Generation(format!("Failed to parse round: {}", e)))?;
    round.validate()?;

    Ok(round)
}

/// A provider chosen at runtime from configuration
#[derive(Debug)]
pub enum AnyProvider {
    Groq(groq::GroqProvider),
    Remote(remote::RemoteProvider),
    Fixed(fixed::FixedProvider),
}

impl RoundProvider for AnyProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Groq(p) => p.name(),
            Self::Remote(p) => p.name(),
            Self::Fixed(p) => p.name(),
        }
    }

    async fn generate_round(&self, request: &RoundRequest) -> Result<GameRound> {
        match self {
            Self::Groq(p) => p.generate_round(request).await,
            Self::Remote(p) => p.generate_round(request).await,
            Self::Fixed(p) => p.generate_round(request).await,
        }
    }
}

/// Build the provider named by `name`, or by the config when `name` is None
pub fn get_provider(config: &Config, name: Option<&str>) -> Result<AnyProvider> {
    let name = name.unwrap_or(&config.provider.backend);

    match name {
        "groq" => Ok(AnyProvider::Groq(groq::GroqProvider::from_config(config)?)),
        "remote" => Ok(AnyProvider::Remote(remote::RemoteProvider::new(
            &config.provider.server_url,
        )?)),
        "fixed" => {
            let provider = if config.provider.rounds_file.is_empty() {
                fixed::FixedProvider::sample()
            } else {
                fixed::FixedProvider::from_file(&config.provider.rounds_file)?
            };
            Ok(AnyProvider::Fixed(provider))
        }
        _ => {
            let names: Vec<String> = available_providers().into_iter().map(|p| p.name).collect();
            Err(Error::Config(format!(
                "Unknown provider: {} (available: {})",
                name,
                names.join(", ")
            )))
        }
    }
}

/// List all available providers with their info
pub fn available_providers() -> Vec<ProviderInfo> {
    vec![
        ProviderInfo {
            name: "groq".to_string(),
            description: "Questions written by an LLM via the Groq API".to_string(),
        },
        ProviderInfo {
            name: "remote".to_string(),
            description: "Rounds fetched from a geo-history server".to_string(),
        },
        ProviderInfo {
            name: "fixed".to_string(),
            description: "Rounds from a JSON file or the built-in sample set".to_string(),
        },
    ]
}
