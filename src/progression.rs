//! Rank progression derived from cumulative experience.
//!
//! Ranks are never stored independently of experience: every write to a
//! player's experience recomputes the rank through [`rank_for`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Progression tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Unranked,
    Minnow,
    Guppy,
    Pond,
    River,
    Lake,
    Stream,
    Bay,
    Ocean,
    #[serde(rename = "Deep Sea")]
    DeepSea,
    Trophy,
    Champion,
    Legendary,
}

/// Minimum experience for each rank above Unranked, ascending.
pub const RANK_THRESHOLDS: [(u64, Rank); 12] = [
    (1, Rank::Minnow),
    (1_000, Rank::Guppy),
    (3_000, Rank::Pond),
    (5_000, Rank::River),
    (10_000, Rank::Lake),
    (15_000, Rank::Stream),
    (20_000, Rank::Bay),
    (30_000, Rank::Ocean),
    (40_000, Rank::DeepSea),
    (50_000, Rank::Trophy),
    (70_000, Rank::Champion),
    (100_000, Rank::Legendary),
];

impl Rank {
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Unranked => "Unranked",
            Rank::Minnow => "Minnow",
            Rank::Guppy => "Guppy",
            Rank::Pond => "Pond",
            Rank::River => "River",
            Rank::Lake => "Lake",
            Rank::Stream => "Stream",
            Rank::Bay => "Bay",
            Rank::Ocean => "Ocean",
            Rank::DeepSea => "Deep Sea",
            Rank::Trophy => "Trophy",
            Rank::Champion => "Champion",
            Rank::Legendary => "Legendary",
        }
    }

    /// Experience at which this rank starts. Unranked starts at zero.
    pub fn min_experience(self) -> u64 {
        RANK_THRESHOLDS
            .iter()
            .find(|(_, rank)| *rank == self)
            .map(|(min, _)| *min)
            .unwrap_or(0)
    }

    /// Experience at which the next rank starts, `None` at the top.
    pub fn next_threshold(self) -> Option<u64> {
        RANK_THRESHOLDS
            .iter()
            .find(|(_, rank)| *rank > self)
            .map(|(min, _)| *min)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps cumulative experience to its rank. Zero experience is Unranked.
pub fn rank_for(experience: u64) -> Rank {
    RANK_THRESHOLDS
        .iter()
        .rev()
        .find(|(min, _)| experience >= *min)
        .map(|(_, rank)| *rank)
        .unwrap_or(Rank::Unranked)
}

/// Experience still needed to reach the next rank, `None` at Legendary.
pub fn progress_to_next_rank(experience: u64) -> Option<u64> {
    rank_for(experience)
        .next_threshold()
        .map(|next| next.saturating_sub(experience))
}
