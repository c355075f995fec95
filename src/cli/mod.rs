//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod play;
pub mod scores;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Historical geography guessing game
#[derive(Parser)]
#[command(name = "geo-history")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a game in the terminal
    Play(play::PlayArgs),

    /// Start the round-content server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// View and manage the high score leaderboard
    Scores(scores::ScoresArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Scores(args) => scores::run(args),
    }
}

/// Install the tracing subscriber, logging to stderr
///
/// `RUST_LOG` wins over `default_level`.
fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
