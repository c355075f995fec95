//! geo-history: Historical Geography Guessing Game
//!
//! A library and CLI for a three-round quiz: place a pin where a historical
//! event happened, then answer five multiple-choice questions about it.
//!
//! ## Features
//!
//! - Great-circle distance and banded pin scoring
//! - Starting pins placed at a random distance and bearing from the answer
//! - Unbiased answer-option shuffling
//! - Explicit round state machine, independent of any front-end
//! - Round content from an LLM, a remote server or a fixed file
//! - Local top-10 leaderboard
//! - HTTP API + terminal game
//!
//! ## Quick Start
//!
//! ```rust
//! use geo_history::coord::geodesy::distance_km;
//! use geo_history::coord::Coordinates;
//! use geo_history::scoring::pin_score;
//!
//! let verdun = Coordinates::new(49.1600, 5.3845);
//! let guess = Coordinates::new(49.0, 5.5);
//!
//! let d = distance_km(guess, verdun);
//! println!("{:.1} km off, {} points", d, pin_score(d));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod provider;
pub mod quiz;
pub mod rng;
pub mod scoring;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use game::{Action, Event, Game, GameState, Phase};
pub use quiz::{Category, Difficulty, GameRound};
