//! Rarity sampling.
//!
//! A fixed, ordered table of rarity weights summing to 1.0. Sampling walks the
//! table in declaration order and returns the first rarity whose running sum
//! exceeds a uniform draw in [0, 1).

use rand::Rng;

use super::types::Rarity;
use crate::core::constants::PROBABILITY_TOLERANCE;
use crate::error::{AnglerError, AnglerResult};

/// Default catch odds.
/// Trash 23.9%, Common 25%, Uncommon 20%, Rare 10%, Epic 8%, Supreme 8%,
/// Mythical 5%, Legendary 0.1%
pub const DEFAULT_RARITY_WEIGHTS: [(Rarity, f64); 8] = [
    (Rarity::Trash, 0.239),
    (Rarity::Common, 0.25),
    (Rarity::Uncommon, 0.20),
    (Rarity::Rare, 0.10),
    (Rarity::Epic, 0.08),
    (Rarity::Supreme, 0.08),
    (Rarity::Mythical, 0.05),
    (Rarity::Legendary, 0.001),
];

/// Validated rarity weight table.
#[derive(Debug, Clone, PartialEq)]
pub struct RarityDistribution {
    entries: Vec<(Rarity, f64)>,
    /// Returned when float error leaves a draw past the final cumulative sum.
    fallback: Rarity,
}

impl RarityDistribution {
    /// Builds a distribution, rejecting tables that are empty, repeat a rarity,
    /// hold a negative or non-finite weight, or do not sum to 1.0.
    pub fn new(entries: Vec<(Rarity, f64)>) -> AnglerResult<Self> {
        let fallback = match entries.last() {
            Some((rarity, _)) => *rarity,
            None => {
                return Err(AnglerError::Configuration(
                    "rarity table is empty".to_string(),
                ))
            }
        };

        for (i, (rarity, weight)) in entries.iter().enumerate() {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(AnglerError::Configuration(format!(
                    "rarity {} has invalid weight {}",
                    rarity, weight
                )));
            }
            if entries[..i].iter().any(|(seen, _)| seen == rarity) {
                return Err(AnglerError::Configuration(format!(
                    "rarity {} is listed more than once",
                    rarity
                )));
            }
        }

        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(AnglerError::Configuration(format!(
                "rarity weights sum to {} instead of 1.0",
                total
            )));
        }

        Ok(Self { entries, fallback })
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[(Rarity, f64)] {
        &self.entries
    }

    pub fn weight_of(&self, rarity: Rarity) -> Option<f64> {
        self.entries
            .iter()
            .find(|(r, _)| *r == rarity)
            .map(|(_, w)| *w)
    }

    pub fn rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.entries.iter().map(|(r, _)| *r)
    }

    /// Samples one rarity.
    pub fn sample(&self, rng: &mut impl Rng) -> Rarity {
        self.pick(rng.gen::<f64>())
    }

    /// Maps a draw in [0, 1) onto the table.
    ///
    /// Draws that no cumulative sum exceeds select the last rarity.
    pub fn pick(&self, draw: f64) -> Rarity {
        let mut cumulative = 0.0;
        for (rarity, weight) in &self.entries {
            cumulative += weight;
            if draw < cumulative {
                return *rarity;
            }
        }
        self.fallback
    }
}

impl Default for RarityDistribution {
    fn default() -> Self {
        Self {
            entries: DEFAULT_RARITY_WEIGHTS.to_vec(),
            fallback: Rarity::Legendary,
        }
    }
}
