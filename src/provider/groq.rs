//! Groq round provider
//!
//! Asks an LLM (via Groq's OpenAI-compatible chat completions API) to write
//! a round and parses the JSON object out of its reply.

use crate::config::Config;
use crate::constants::api::GROQ_API_KEY_ENV;
use crate::constants::game::{FOLLOW_UPS_PER_ROUND, TOTAL_ROUNDS};
use crate::error::{Error, Result};
use crate::provider::{parse_round, RoundProvider, RoundRequest};
use crate::quiz::GameRound;
use serde::{Deserialize, Serialize};
use tracing::debug;

const USER_AGENT: &str = concat!("geo-history/", env!("CARGO_PKG_VERSION"));

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates historical geography questions in JSON format.";

/// Groq chat completions provider
#[derive(Debug, Clone)]
pub struct GroqProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    model: &'a str,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl GroqProvider {
    /// Create a provider from configuration
    ///
    /// The API key comes from `api_keys.groq`, falling back to the
    /// `GROQ_API_KEY` environment variable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = if config.api_keys.groq.is_empty() {
            std::env::var(GROQ_API_KEY_ENV).unwrap_or_default()
        } else {
            config.api_keys.groq.clone()
        };

        if api_key.is_empty() {
            return Err(Error::Config(format!(
                "Groq API key not configured (set api_keys.groq or {})",
                GROQ_API_KEY_ENV
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.provider.api_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.provider.model.clone(),
            temperature: config.provider.temperature,
            max_tokens: config.provider.max_tokens,
        })
    }

    /// Model used for generation
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Build the user prompt for one round
pub fn build_prompt(request: &RoundRequest) -> String {
    format!(
        r#"You are a historical geography game master. Generate a location-based question for a game.

Category: {category}
Difficulty: {difficulty}
Round: {round} of {total}

Generate a JSON object with the following structure:
{{
  "locationQuestion": {{
    "question": "A specific question about where a historical event occurred (be precise about the date and event)",
    "answer": "The name of the location (city, region, or battlefield)",
    "coordinates": {{
      "lat": <latitude as number>,
      "lng": <longitude as number>
    }}
  }},
  "followUpQuestions": [
    {{
      "question": "Question about the event or location",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": <index 0-3 of correct option>
    }}
    // ... {more} more questions ({follow_ups} total)
  ]
}}

Guidelines:
- For {difficulty} difficulty:
  {guidelines}
- Location question should ask "Where did X occur on [date]" or similar
- Provide exact coordinates (latitude, longitude)
- Follow-up questions should test knowledge about the event, its consequences, key figures, or the location
- Make sure options are plausible but only one is correct
- Vary the correct answer position (don't always make it option A)

Return ONLY the JSON object, no additional text."#,
        category = request.category,
        difficulty = request.difficulty,
        round = request.round_number,
        total = TOTAL_ROUNDS,
        more = FOLLOW_UPS_PER_ROUND - 1,
        follow_ups = FOLLOW_UPS_PER_ROUND,
        guidelines = request.difficulty.guidelines(),
    )
}

impl RoundProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn generate_round(&self, request: &RoundRequest) -> Result<GameRound> {
        let prompt = build_prompt(request);
        let body = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            model: &self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(
            "Requesting round {} ({} / {}) from {}",
            request.round_number, request.category, request.difficulty, self.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Generation(format!("Groq request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Generation(format!(
                "Groq returned status: {}",
                response.status()
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Generation(format!("Failed to parse Groq response: {}", e)))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        parse_round(&content)
    }
}
