//! Player records and the on-disk ledger document.
//!
//! The document keeps the legacy key names: `level` holds cumulative
//! experience and `league` holds the rank label. In memory these are
//! `experience` and `rank`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnglerError;
use crate::progression::{rank_for, Rank};

/// A player's persistent progress. The rank always matches the experience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    player_id: u64,
    money: u64,
    experience: u64,
    rank: Rank,
}

impl PlayerRecord {
    pub fn new(player_id: u64, money: u64, experience: u64) -> Self {
        Self {
            player_id,
            money,
            experience,
            rank: rank_for(experience),
        }
    }

    /// Record for a player who has never caught anything.
    pub fn zeroed(player_id: u64) -> Self {
        Self::new(player_id, 0, 0)
    }

    pub fn player_id(&self) -> u64 {
        self.player_id
    }

    pub fn money(&self) -> u64 {
        self.money
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn value_of(&self, field: LedgerField) -> u64 {
        match field {
            LedgerField::Money => self.money,
            LedgerField::Experience => self.experience,
        }
    }

    /// Adds catch rewards and recomputes the rank.
    pub fn credit(&mut self, money: u64, experience: u64) {
        self.money = self.money.saturating_add(money);
        self.experience = self.experience.saturating_add(experience);
        self.rank = rank_for(self.experience);
    }

    /// Zeroes one field, recomputing the rank when experience is reset.
    pub fn reset(&mut self, field: LedgerField) {
        match field {
            LedgerField::Money => self.money = 0,
            LedgerField::Experience => {
                self.experience = 0;
                self.rank = rank_for(0);
            }
        }
    }
}

/// Fields an admin may reset or rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerField {
    Money,
    Experience,
}

impl LedgerField {
    pub fn as_str(self) -> &'static str {
        match self {
            LedgerField::Money => "money",
            LedgerField::Experience => "experience",
        }
    }
}

impl fmt::Display for LedgerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerField {
    type Err = AnglerError;

    /// Accepts `money`, or `experience` under its legacy names
    /// (`xp`, `level`, `levels`). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "money" => Ok(LedgerField::Money),
            "experience" | "xp" | "level" | "levels" => Ok(LedgerField::Experience),
            _ => Err(AnglerError::InvalidField(s.to_string())),
        }
    }
}

/// One row of the persisted `STATS` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub user_id: u64,
    pub money: u64,
    /// Cumulative experience.
    pub level: u64,
    /// Rank label; recomputed from `level` on load.
    #[serde(default)]
    pub league: String,
}

impl From<&PlayerRecord> for LedgerEntry {
    fn from(record: &PlayerRecord) -> Self {
        Self {
            user_id: record.player_id,
            money: record.money,
            level: record.experience,
            league: record.rank.to_string(),
        }
    }
}

impl From<&LedgerEntry> for PlayerRecord {
    fn from(entry: &LedgerEntry) -> Self {
        PlayerRecord::new(entry.user_id, entry.money, entry.level)
    }
}

/// The whole ledger as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(rename = "STATS", default)]
    pub stats: Vec<LedgerEntry>,
}

impl LedgerDocument {
    pub fn get(&self, player_id: u64) -> Option<&LedgerEntry> {
        self.stats.iter().find(|e| e.user_id == player_id)
    }

    pub fn contains(&self, player_id: u64) -> bool {
        self.get(player_id).is_some()
    }

    /// Replaces the entry with the same id in place, or appends.
    pub fn upsert(&mut self, record: &PlayerRecord) {
        let entry = LedgerEntry::from(record);
        match self.stats.iter_mut().find(|e| e.user_id == entry.user_id) {
            Some(existing) => *existing = entry,
            None => self.stats.push(entry),
        }
    }

    /// Removes the entry. Returns false if it was absent.
    pub fn remove(&mut self, player_id: u64) -> bool {
        let before = self.stats.len();
        self.stats.retain(|e| e.user_id != player_id);
        self.stats.len() != before
    }

    pub fn clear(&mut self) {
        self.stats.clear();
    }

    pub fn records(&self) -> impl Iterator<Item = PlayerRecord> + '_ {
        self.stats.iter().map(PlayerRecord::from)
    }

    /// `(player_id, value)` pairs, highest first; ties keep document order.
    pub fn ranked_by(&self, field: LedgerField) -> Vec<(u64, u64)> {
        let mut ranking: Vec<(u64, u64)> = self
            .records()
            .map(|r| (r.player_id(), r.value_of(field)))
            .collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1));
        ranking
    }
}
