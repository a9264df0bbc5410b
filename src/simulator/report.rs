//! Simulation report generation.

use serde::Serialize;

use crate::fishing::{Rarity, RarityDistribution, RolledLoot};

/// Tally for one rarity tier.
#[derive(Debug, Clone, Serialize)]
pub struct RarityStats {
    pub rarity: Rarity,
    /// Declared probability as a percentage
    pub declared_pct: f64,
    pub catches: u64,
    /// Draws of this rarity that produced no catch
    pub misses: u64,
    pub total_experience: u64,
    pub total_reward: u64,
    pub total_weight: f64,
}

impl RarityStats {
    fn new(rarity: Rarity, probability: f64) -> Self {
        Self {
            rarity,
            declared_pct: probability * 100.0,
            catches: 0,
            misses: 0,
            total_experience: 0,
            total_reward: 0,
            total_weight: 0.0,
        }
    }

    pub fn draws(&self) -> u64 {
        self.catches + self.misses
    }

    pub fn avg_experience(&self) -> f64 {
        self.total_experience as f64 / self.catches.max(1) as f64
    }

    pub fn avg_reward(&self) -> f64 {
        self.total_reward as f64 / self.catches.max(1) as f64
    }

    pub fn avg_weight(&self) -> f64 {
        self.total_weight / self.catches.max(1) as f64
    }
}

/// Aggregated results of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub total_catches: u64,
    pub total_misses: u64,
    pub total_experience: u64,
    pub total_reward: u64,
    /// One entry per rarity, in distribution order
    pub rarities: Vec<RarityStats>,
}

impl SimReport {
    pub fn new(distribution: &RarityDistribution) -> Self {
        Self {
            total_catches: 0,
            total_misses: 0,
            total_experience: 0,
            total_reward: 0,
            rarities: distribution
                .entries()
                .iter()
                .map(|&(rarity, p)| RarityStats::new(rarity, p))
                .collect(),
        }
    }

    fn stats_mut(&mut self, rarity: Rarity) -> Option<&mut RarityStats> {
        self.rarities.iter_mut().find(|s| s.rarity == rarity)
    }

    pub fn stats_for(&self, rarity: Rarity) -> Option<&RarityStats> {
        self.rarities.iter().find(|s| s.rarity == rarity)
    }

    pub fn record_catch(&mut self, loot: &RolledLoot) {
        self.total_catches += 1;
        self.total_experience += loot.experience_value;
        self.total_reward += loot.reward_value;
        if let Some(stats) = self.stats_mut(loot.rarity()) {
            stats.catches += 1;
            stats.total_experience += loot.experience_value;
            stats.total_reward += loot.reward_value;
            stats.total_weight += loot.weight;
        }
    }

    pub fn record_miss(&mut self, rarity: Rarity) {
        self.total_misses += 1;
        if let Some(stats) = self.stats_mut(rarity) {
            stats.misses += 1;
        }
    }

    pub fn total_draws(&self) -> u64 {
        self.total_catches + self.total_misses
    }

    /// Observed share of all draws that landed on `rarity`, as a percentage.
    pub fn observed_pct(&self, rarity: Rarity) -> f64 {
        let draws = self.stats_for(rarity).map_or(0, RarityStats::draws);
        draws as f64 / self.total_draws().max(1) as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("═══════════════════════════════════════════════════════════════\n");
        out.push_str("                    DROP RATE SIMULATION REPORT\n");
        out.push_str("═══════════════════════════════════════════════════════════════\n\n");

        out.push_str("── SUMMARY ──\n");
        out.push_str(&format!("Draws:            {}\n", self.total_draws()));
        out.push_str(&format!("Catches:          {}\n", self.total_catches));
        out.push_str(&format!("No catch:         {}\n", self.total_misses));
        out.push_str(&format!(
            "Avg XP/catch:     {:.1}\n",
            self.total_experience as f64 / self.total_catches.max(1) as f64
        ));
        out.push_str(&format!(
            "Avg gold/catch:   {:.1}\n\n",
            self.total_reward as f64 / self.total_catches.max(1) as f64
        ));

        out.push_str("── RARITY BREAKDOWN ──\n");
        out.push_str(&format!(
            "{:<10} {:>9} {:>9} {:>9} {:>8} {:>9} {:>8}\n",
            "Rarity", "Declared", "Observed", "Catches", "Avg XP", "Avg Gold", "Avg KG"
        ));
        for stats in &self.rarities {
            out.push_str(&format!(
                "{:<10} {:>8.2}% {:>8.2}% {:>9} {:>8.1} {:>9.1} {:>8.2}\n",
                stats.rarity.name(),
                stats.declared_pct,
                self.observed_pct(stats.rarity),
                stats.catches,
                stats.avg_experience(),
                stats.avg_reward(),
                stats.avg_weight(),
            ));
        }

        out
    }

    /// Generate JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
