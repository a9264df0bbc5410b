//! Simulation runner.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use super::config::SimConfig;
use super::report::SimReport;
use crate::error::AnglerError;
use crate::fishing::{LootCatalog, RarityDistribution, RollTable};

/// Draw `config.num_catches` catches and tally them.
///
/// Catches that fail (empty catalog bucket, missing roll range) are counted as
/// misses rather than aborting the run.
pub fn run_simulation(
    config: &SimConfig,
    distribution: &RarityDistribution,
    catalog: &LootCatalog,
    rolls: &RollTable,
) -> SimReport {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let missing = catalog.missing_rarities(distribution);
    if !missing.is_empty() {
        warn!(?missing, "catalog has no templates for some rarities");
    }
    info!(catches = config.num_catches, seed = ?config.seed, "starting simulation");

    let mut report = SimReport::new(distribution);

    for _ in 0..config.num_catches {
        let rarity = distribution.sample(&mut rng);
        let outcome = catalog
            .choose(rarity, &mut rng)
            .ok_or(AnglerError::NoCatchAvailable(rarity))
            .and_then(|template| rolls.roll(template, &mut rng));

        match outcome {
            Ok(loot) => report.record_catch(&loot),
            Err(_) => report.record_miss(rarity),
        }
    }

    report
}
