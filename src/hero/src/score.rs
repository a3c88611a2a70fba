// src/hero/src/score.rs

use serde::{Deserialize, Serialize};

/// Final result of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub name: String,
    pub level: u32,
    pub score: u32,
}

pub const DEFAULT_CAPACITY: usize = 3;

/// Best scores, highest first.
///
/// Where the table is stored is up to the caller; only the JSON form is
/// provided here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    entries: Vec<Score>,
    capacity: usize,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl HighScores {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn entries(&self) -> &[Score] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `score` would make it into the table.
    pub fn qualifies(&self, score: &Score) -> bool {
        self.entries.len() < self.capacity
            || self.entries.last().is_some_and(|s| score.score > s.score)
    }

    /// Inserts `score`, returning its rank when it made the table.
    ///
    /// Ties keep the older entry ahead.
    pub fn insert(&mut self, score: Score) -> Option<usize> {
        if !self.qualifies(&score) {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|s| s.score < score.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(rank, score);
        self.entries.truncate(self.capacity);
        Some(rank)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a table, restoring the ordering and capacity bound.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut table: Self = serde_json::from_str(json)?;
        table.entries.sort_by(|a, b| b.score.cmp(&a.score));
        table.entries.truncate(table.capacity);
        Ok(table)
    }
}
