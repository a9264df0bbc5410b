//! Drop-rate statistics tests
//!
//! Checks observed rarity frequencies and roll bounds over large samples.

use angler::fishing::{LootCatalog, Rarity, RarityDistribution, RollTable};
use angler::simulator::{run_simulation, SimConfig};

const SAMPLES: u64 = 200_000;

#[test]
fn test_observed_frequencies_match_declared_weights() {
    let dist = RarityDistribution::default();
    let config = SimConfig {
        num_catches: SAMPLES,
        seed: Some(12345),
    };
    let report = run_simulation(&config, &dist, &LootCatalog::default(), &RollTable::default());

    for &(rarity, p) in dist.entries() {
        let observed = report.observed_pct(rarity) / 100.0;
        assert!(
            (observed - p).abs() < 0.01,
            "{} observed {:.4}, declared {:.4}",
            rarity,
            observed,
            p
        );
    }
}

#[test]
fn test_trash_never_pays() {
    let config = SimConfig {
        num_catches: 20_000,
        seed: Some(1),
    };
    let report = run_simulation(
        &config,
        &RarityDistribution::default(),
        &LootCatalog::default(),
        &RollTable::default(),
    );

    let trash = report.stats_for(Rarity::Trash).unwrap();
    assert!(trash.catches > 0);
    assert_eq!(trash.total_experience, 0);
    assert_eq!(trash.total_reward, 0);
}

#[test]
fn test_average_experience_within_roll_bounds() {
    let rolls = RollTable::default();
    let config = SimConfig {
        num_catches: 50_000,
        seed: Some(99),
    };
    let report = run_simulation(
        &config,
        &RarityDistribution::default(),
        &LootCatalog::default(),
        &rolls,
    );

    for stats in report.rarities.iter().filter(|s| s.catches > 0) {
        let range = rolls.range_for(stats.rarity).unwrap();
        let avg = stats.avg_experience();
        assert!(avg >= range.experience.0 as f64 && avg <= range.experience.1 as f64);
        let kg = stats.avg_weight();
        assert!(kg >= range.weight.0 && kg <= range.weight.1);
    }
}
