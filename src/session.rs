//! Catch orchestration and the admin surface over the player ledger.
//!
//! A catch samples a rarity, picks a template, rolls it, and credits the
//! player in a single ledger update. Rolling happens outside the ledger lock;
//! only the read-modify-write of the record is serialized.

use rand::Rng;
use tracing::{info, warn};

use crate::core::config::{EconomyConfig, Settings};
use crate::error::{AnglerError, AnglerResult};
use crate::fishing::{LootCatalog, RarityDistribution, RollTable, RolledLoot};
use crate::ledger::{JsonFileStore, LedgerField, LedgerStore, PlayerLedger, PlayerRecord};
use crate::progression::Rank;

/// Outcome of a successful catch.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchResult {
    pub loot: RolledLoot,
    /// The player's record after the rewards were applied.
    pub player: PlayerRecord,
    pub previous_rank: Rank,
}

impl CatchResult {
    pub fn ranked_up(&self) -> bool {
        self.player.rank() > self.previous_rank
    }
}

/// The catch engine: immutable economy tables plus the shared ledger.
pub struct Angler<S: LedgerStore = JsonFileStore> {
    distribution: RarityDistribution,
    catalog: LootCatalog,
    rolls: RollTable,
    ledger: PlayerLedger<S>,
}

impl Angler<JsonFileStore> {
    /// Builds an engine from startup settings with the built-in catalog.
    pub fn from_settings(settings: &Settings) -> AnglerResult<Self> {
        let path = settings.resolve_ledger_path()?;
        info!(ledger = %path.display(), "opening ledger");
        Self::new(
            &settings.economy,
            LootCatalog::default(),
            PlayerLedger::open(path),
        )
    }
}

impl<S: LedgerStore> Angler<S> {
    /// Validates the economy tables and assembles an engine.
    ///
    /// Rarities the catalog cannot serve are logged, not rejected; catches of
    /// those rarities report `NoCatchAvailable`.
    pub fn new(
        config: &EconomyConfig,
        catalog: LootCatalog,
        ledger: PlayerLedger<S>,
    ) -> AnglerResult<Self> {
        let distribution = config.distribution()?;
        let rolls = config.roll_table()?;

        let missing = catalog.missing_rarities(&distribution);
        if !missing.is_empty() {
            warn!(?missing, "catalog has no templates for some rarities");
        }

        Ok(Self {
            distribution,
            catalog,
            rolls,
            ledger,
        })
    }

    /// Engine with the built-in tables and catalog.
    pub fn with_defaults(ledger: PlayerLedger<S>) -> Self {
        Self {
            distribution: RarityDistribution::default(),
            catalog: LootCatalog::default(),
            rolls: RollTable::default(),
            ledger,
        }
    }

    pub fn distribution(&self) -> &RarityDistribution {
        &self.distribution
    }

    pub fn catalog(&self) -> &LootCatalog {
        &self.catalog
    }

    pub fn roll_table(&self) -> &RollTable {
        &self.rolls
    }

    pub fn ledger(&self) -> &PlayerLedger<S> {
        &self.ledger
    }

    /// Rolls one catch without touching the ledger.
    pub fn draw(&self, rng: &mut impl Rng) -> AnglerResult<RolledLoot> {
        let rarity = self.distribution.sample(rng);
        let template = self.catalog.choose(rarity, rng).ok_or_else(|| {
            warn!(%rarity, "no catch available");
            AnglerError::NoCatchAvailable(rarity)
        })?;
        self.rolls.roll(template, rng)
    }

    /// Catches for a player using the thread-local random source.
    pub fn catch(&self, player_id: u64) -> AnglerResult<CatchResult> {
        self.catch_with_rng(player_id, &mut rand::thread_rng())
    }

    /// Catches for a player. Nothing is written unless the roll succeeds.
    pub fn catch_with_rng(&self, player_id: u64, rng: &mut impl Rng) -> AnglerResult<CatchResult> {
        let loot = self.draw(rng)?;
        let (player, previous_rank) = self.apply_rewards(player_id, &loot)?;

        info!(
            player_id,
            catch = %loot.template.name,
            rarity = %loot.rarity(),
            reward = loot.reward_value,
            xp = loot.experience_value,
            rank = %player.rank(),
            "caught"
        );

        Ok(CatchResult {
            loot,
            player,
            previous_rank,
        })
    }

    /// Credits a rolled catch: experience to experience, reward value to money.
    pub fn credit(&self, player_id: u64, loot: &RolledLoot) -> AnglerResult<PlayerRecord> {
        self.apply_rewards(player_id, loot).map(|(player, _)| player)
    }

    fn apply_rewards(&self, player_id: u64, loot: &RolledLoot) -> AnglerResult<(PlayerRecord, Rank)> {
        let mut previous_rank = Rank::Unranked;
        let player = self.ledger.update(player_id, |record| {
            previous_rank = record.rank();
            record.credit(loot.reward_value, loot.experience_value);
        })?;
        Ok((player, previous_rank))
    }

    pub fn get_player(&self, player_id: u64) -> AnglerResult<PlayerRecord> {
        self.ledger.load(player_id)
    }

    pub fn get_ranking(&self, field: LedgerField) -> AnglerResult<Vec<(u64, u64)>> {
        self.ledger.ranked_by(field)
    }

    pub fn get_ranking_named(&self, field: &str) -> AnglerResult<Vec<(u64, u64)>> {
        self.ledger.ranked_by_named(field)
    }

    /// The first `n` entries of a ranking.
    pub fn top(&self, field: LedgerField, n: usize) -> AnglerResult<Vec<(u64, u64)>> {
        let mut ranking = self.get_ranking(field)?;
        ranking.truncate(n);
        Ok(ranking)
    }

    pub fn reset_player_field(&self, player_id: u64, field: &str) -> AnglerResult<PlayerRecord> {
        self.ledger.reset_field_named(player_id, field)
    }

    pub fn delete_player(&self, player_id: u64) -> AnglerResult<()> {
        self.ledger.delete_one(player_id)
    }

    pub fn delete_all_players(&self) -> AnglerResult<()> {
        self.ledger.delete_all()
    }
}
