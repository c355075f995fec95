//! geo-history CLI entry point
//!
//! Historical geography guessing game - terminal game + round server

use geo_history::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
