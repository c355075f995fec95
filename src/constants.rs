//! Centralized constants for the geo-history crate
//!
//! Constants shared by the geodesy, game and provider modules live here so
//! the rules of the game are stated in one place.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
}

/// Game rules
pub mod game {
    /// Rounds per playthrough
    pub const TOTAL_ROUNDS: usize = 3;

    /// Follow-up questions per round
    pub const FOLLOW_UPS_PER_ROUND: usize = 5;

    /// Answer options per follow-up question
    pub const OPTIONS_PER_QUESTION: usize = 4;

    /// Annulus for the first round's starting pin (km from the answer)
    pub const FIRST_PIN_MIN_KM: f64 = 100.0;
    pub const FIRST_PIN_MAX_KM: f64 = 800.0;

    /// Annulus for every later round's starting pin (km from the answer)
    pub const NEXT_PIN_MIN_KM: f64 = 300.0;
    pub const NEXT_PIN_MAX_KM: f64 = 800.0;
}

/// Leaderboard limits
pub mod leaderboard {
    /// Entries kept on the leaderboard
    pub const MAX_ENTRIES: usize = 10;

    /// Maximum player name length in characters
    pub const MAX_NAME_LEN: usize = 20;

    /// Leaderboard file name
    pub const FILE_NAME: &str = "high_scores.json";
}

/// External API endpoints
pub mod api {
    /// Groq OpenAI-compatible API base
    pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1";

    /// Environment variable consulted for the Groq API key
    pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

    /// Round generation route served by `geo-history serve`
    pub const GENERATE_ROUND_PATH: &str = "/api/generate-round";
}
