//! Scores command handler
//!
//! View and clear the local leaderboard.

use crate::error::Result;
use crate::leaderboard::{HighScore, Leaderboard};
use clap::{Args, Subcommand};
use std::io::Write;

/// Scores command arguments
#[derive(Args)]
pub struct ScoresArgs {
    #[command(subcommand)]
    pub command: Option<ScoresCommand>,

    /// Number of entries to show (default: 10)
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,
}

/// Scores subcommands
#[derive(Subcommand)]
pub enum ScoresCommand {
    /// List high scores
    List {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
    /// Remove all high scores
    Clear,
}

/// Run the scores command
pub fn run(args: ScoresArgs) -> Result<()> {
    let mut board = Leaderboard::load()?;
    run_with(args, &mut board, &mut std::io::stdout())
}

fn run_with<W: Write>(args: ScoresArgs, board: &mut Leaderboard, out: &mut W) -> Result<()> {
    let command = args.command.unwrap_or(ScoresCommand::List { count: args.count });

    match command {
        ScoresCommand::List { count } => print_scores(board.entries(), count, out),
        ScoresCommand::Clear => {
            board.clear();
            board.save()?;
            writeln!(out, "Leaderboard cleared.")?;
            Ok(())
        }
    }
}

/// Print up to `count` entries as a ranked table
pub fn print_scores<W: Write>(entries: &[HighScore], count: usize, out: &mut W) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "No high scores yet.")?;
        return Ok(());
    }

    writeln!(out, "High scores:\n")?;
    for (rank, entry) in entries.iter().take(count).enumerate() {
        writeln!(
            out,
            "  {:>2}. {:<20} {:>3}  {} / {}  {}",
            rank + 1,
            entry.name,
            entry.score,
            entry.category,
            entry.difficulty,
            entry.date.format("%Y-%m-%d")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Category, Difficulty};
    use tempfile::TempDir;

    fn board_with_scores(temp_dir: &TempDir) -> Leaderboard {
        let mut board = Leaderboard::load_from(temp_dir.path().join("high_scores.json"));
        board.submit("Ada", 41, Category::Ww1, Difficulty::Hard);
        board.submit("Grace", 17, Category::ColdWar, Difficulty::Easy);
        board.submit("Linus", 29, Category::AncientRome, Difficulty::Medium);
        board
    }

    #[test]
    fn test_list_ranked_and_limited() {
        let temp_dir = TempDir::new().unwrap();
        let mut board = board_with_scores(&temp_dir);
        let mut out = Vec::new();

        let args = ScoresArgs {
            command: Some(ScoresCommand::List { count: 2 }),
            count: 10,
        };
        run_with(args, &mut board, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let ada = text.find("Ada").unwrap();
        let linus = text.find("Linus").unwrap();
        assert!(ada < linus);
        assert!(!text.contains("Grace"));
        assert!(text.contains("WW1 / Hard"));
    }

    #[test]
    fn test_list_empty() {
        let mut out = Vec::new();
        print_scores(&[], 10, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No high scores yet.\n");
    }

    #[test]
    fn test_clear_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut board = board_with_scores(&temp_dir);
        board.save().unwrap();

        let args = ScoresArgs {
            command: Some(ScoresCommand::Clear),
            count: 10,
        };
        run_with(args, &mut board, &mut Vec::new()).unwrap();

        let reloaded = Leaderboard::load_from(temp_dir.path().join("high_scores.json"));
        assert!(reloaded.is_empty());
    }
}
