//! High score leaderboard
//!
//! Stores the top scores in a JSON file in the XDG data directory
//! (~/.local/share/geo-history/). A missing or unreadable file is an empty
//! leaderboard; losing it is never worth failing a game over.

use crate::config::defaults::APP_DIR_NAME;
use crate::constants::leaderboard::{FILE_NAME, MAX_ENTRIES, MAX_NAME_LEN};
use crate::error::{Error, Result};
use crate::quiz::{Category, Difficulty};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// A finished game on the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScore {
    pub name: String,
    pub score: u32,
    pub category: Category,
    pub difficulty: Difficulty,
    pub date: DateTime<Utc>,
}

impl HighScore {
    /// Create a high score stamped with the current time
    pub fn new(name: impl Into<String>, score: u32, category: Category, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            score,
            category,
            difficulty,
            date: Utc::now(),
        }
    }
}

/// Clean up a player name: trimmed, capped, None when blank
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_NAME_LEN).collect())
}

/// Leaderboard storage manager
#[derive(Debug)]
pub struct Leaderboard {
    entries: Vec<HighScore>,
    path: PathBuf,
}

impl Leaderboard {
    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Storage("Could not determine data directory".to_string()))
    }

    /// Get the leaderboard file path
    pub fn leaderboard_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(FILE_NAME))
    }

    /// Load the leaderboard from the default path
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(Self::leaderboard_path()?))
    }

    /// Load the leaderboard from a specific path
    ///
    /// Missing, unreadable or corrupt files yield an empty leaderboard.
    pub fn load_from(path: PathBuf) -> Self {
        let entries = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str::<Vec<HighScore>>(&content) {
                    Ok(mut entries) => {
                        sort_and_truncate(&mut entries);
                        entries
                    }
                    Err(e) => {
                        warn!("Ignoring corrupt leaderboard {}: {}", path.display(), e);
                        Vec::new()
                    }
                },
                Err(e) => {
                    warn!("Could not read leaderboard {}: {}", path.display(), e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Self { entries, path }
    }

    /// Save the leaderboard to disk
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Storage(format!("Failed to create leaderboard directory: {}", e))
            })?;
        }

        let content = serde_json::to_string_pretty(&self.entries).map_err(|e| {
            Error::Storage(format!("Failed to serialize leaderboard: {}", e))
        })?;

        fs::write(&self.path, content).map_err(|e| {
            Error::Storage(format!("Failed to write leaderboard file: {}", e))
        })?;

        Ok(())
    }

    /// Add a high score
    ///
    /// The entry is appended and the list re-sorted by score (stable, so
    /// earlier entries win ties), then cut to the top 10. Returns the
    /// 0-based rank of the new entry, or None if it didn't make the cut.
    pub fn add(&mut self, entry: HighScore) -> Option<usize> {
        self.entries.push(entry);
        let new_index = self.entries.len() - 1;

        let mut indexed: Vec<(usize, HighScore)> = self.entries.drain(..).enumerate().collect();
        indexed.sort_by(|a, b| b.1.score.cmp(&a.1.score));

        let rank = indexed.iter().position(|(i, _)| *i == new_index);
        self.entries = indexed.into_iter().map(|(_, e)| e).take(MAX_ENTRIES).collect();

        rank.filter(|r| *r < MAX_ENTRIES)
    }

    /// Submit a finished game under a player name
    ///
    /// Blank names are ignored (returns None without touching the list).
    pub fn submit(
        &mut self,
        name: &str,
        score: u32,
        category: Category,
        difficulty: Difficulty,
    ) -> Option<usize> {
        let name = normalize_name(name)?;
        self.add(HighScore::new(name, score, category, difficulty))
    }

    /// Get all entries, highest score first
    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Path backing this leaderboard
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

fn sort_and_truncate(entries: &mut Vec<HighScore>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
}
