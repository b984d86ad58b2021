//! Score Leaderboard
//!
//! Keeps the best run scores in descending order and persists them as JSON.
//! The menu layer only reads the top entry; the host loop records new scores
//! after each run and saves the board back to disk.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum number of retained records
pub const MAX_ENTRIES: usize = 10;

/// A single scored run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    pub recorded_at: DateTime<Local>,
}

/// Best scores, highest first
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    scores: Vec<ScoreRecord>,
}

impl Leaderboard {
    /// Creates an empty leaderboard
    pub fn new() -> Self {
        Leaderboard { scores: Vec::new() }
    }

    /// All records, best first
    #[allow(dead_code)] // Reserved for a full leaderboard screen
    pub fn scores(&self) -> &[ScoreRecord] {
        &self.scores
    }

    /// The best record, if any scores have been recorded
    pub fn top(&self) -> Option<&ScoreRecord> {
        self.scores.first()
    }

    /// Records a finished run
    ///
    /// Inserts a timestamped record, keeps the list sorted best-first and
    /// drops everything past [`MAX_ENTRIES`]. Ties keep the earlier record
    /// first.
    pub fn record(&mut self, score: u32) {
        self.scores.push(ScoreRecord {
            score,
            recorded_at: Local::now(),
        });
        self.scores.sort_by(|a, b| b.score.cmp(&a.score));
        self.scores.truncate(MAX_ENTRIES);
    }

    /// Loads a leaderboard from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LeaderboardError> {
        let json = fs::read_to_string(path)?;
        let mut board: Leaderboard = serde_json::from_str(&json)?;
        // A hand-edited file may be out of order; the sorted invariant is
        // re-established on load
        board.scores.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(board)
    }

    /// Saves the leaderboard as pretty-printed JSON
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LeaderboardError> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Error types for leaderboard persistence
#[derive(Debug)]
pub enum LeaderboardError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl std::fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardError::Io(e) => write!(f, "IO error: {}", e),
            LeaderboardError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for LeaderboardError {}

impl From<std::io::Error> for LeaderboardError {
    fn from(err: std::io::Error) -> Self {
        LeaderboardError::Io(err)
    }
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(err: serde_json::Error) -> Self {
        LeaderboardError::Serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_empty_board() {
        let board = Leaderboard::new();
        assert!(board.top().is_none());
        assert!(board.scores().is_empty());
    }

    #[test]
    fn test_record_keeps_descending_order() {
        let mut board = Leaderboard::new();
        board.record(10);
        board.record(30);
        board.record(20);

        let scores: Vec<u32> = board.scores().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![30, 20, 10]);
        assert_eq!(board.top().map(|r| r.score), Some(30));
    }

    #[test]
    fn test_record_caps_entries() {
        let mut board = Leaderboard::new();
        for score in 0..15 {
            board.record(score);
        }

        assert_eq!(board.scores().len(), MAX_ENTRIES);
        // The lowest scores are the ones dropped
        assert_eq!(board.top().map(|r| r.score), Some(14));
        assert_eq!(board.scores().last().map(|r| r.score), Some(5));
    }

    #[test]
    fn test_record_ties_keep_earlier_first() {
        let mut board = Leaderboard::new();
        board.record(5);
        let first_at = board.scores()[0].recorded_at;
        board.record(5);

        assert_eq!(board.scores()[0].recorded_at, first_at);
    }
}
