//! Loot rolls: money, experience, and weight drawn per rarity.
//!
//! Money and experience bounds are inclusive integers; weight is a uniform
//! float rounded to two decimals. The credited reward is derived from the
//! rolled experience and weight, not from the money roll.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use super::types::{LootTemplate, Rarity, RollRange, RolledLoot};
use crate::error::{AnglerError, AnglerResult};

/// Roll bounds by rarity (money, experience, weight in kg).
pub const DEFAULT_ROLL_RANGES: [(Rarity, RollRange); 8] = [
    (Rarity::Trash, RollRange::new((1, 9), (0, 0), (0.10, 0.90))),
    (Rarity::Common, RollRange::new((10, 50), (50, 100), (1.00, 5.00))),
    (Rarity::Uncommon, RollRange::new((51, 150), (101, 250), (5.10, 10.00))),
    (Rarity::Rare, RollRange::new((151, 500), (251, 500), (10.10, 20.00))),
    (Rarity::Epic, RollRange::new((501, 1500), (501, 1000), (20.10, 30.00))),
    (Rarity::Supreme, RollRange::new((1501, 3000), (1001, 2000), (30.10, 40.00))),
    (Rarity::Mythical, RollRange::new((3001, 5000), (2001, 3500), (40.10, 50.00))),
    (Rarity::Legendary, RollRange::new((5001, 10_000), (3501, 5000), (50.10, 60.00))),
];

/// Money credited for a catch: half of experience times weight, rounded
/// half-to-even.
pub fn reward_value(experience_value: u64, weight: f64) -> u64 {
    let raw = (experience_value as f64 * weight) / 2.0;
    raw.round_ties_even().max(0.0) as u64
}

/// Rounds a weight to two decimals.
fn round_weight(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}

/// Freshly rolled numbers for one catch, before a template is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollValues {
    pub monetary_value: u64,
    pub experience_value: u64,
    pub weight: f64,
    pub reward_value: u64,
}

impl RollValues {
    pub fn into_loot(self, template: LootTemplate) -> RolledLoot {
        RolledLoot {
            template,
            monetary_value: self.monetary_value,
            experience_value: self.experience_value,
            weight: self.weight,
            reward_value: self.reward_value,
        }
    }
}

/// Validated per-rarity roll bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RollTable {
    ranges: BTreeMap<Rarity, RollRange>,
}

impl RollTable {
    /// Builds a table, rejecting inverted, negative, or repeated ranges.
    pub fn new(ranges: Vec<(Rarity, RollRange)>) -> AnglerResult<Self> {
        let mut table = BTreeMap::new();
        for (rarity, range) in ranges {
            validate_range(rarity, &range)?;
            if table.insert(rarity, range).is_some() {
                return Err(AnglerError::Configuration(format!(
                    "roll range for {} is listed more than once",
                    rarity
                )));
            }
        }
        Ok(Self { ranges: table })
    }

    /// Bounds for a rarity, or `UnknownRarity` if the table has none.
    pub fn range_for(&self, rarity: Rarity) -> AnglerResult<&RollRange> {
        self.ranges
            .get(&rarity)
            .ok_or_else(|| AnglerError::UnknownRarity(rarity.to_string()))
    }

    pub fn rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.ranges.keys().copied()
    }

    /// Rolls money, experience, and weight independently for a rarity.
    pub fn roll_for(&self, rarity: Rarity, rng: &mut impl Rng) -> AnglerResult<RollValues> {
        let range = self.range_for(rarity)?;

        let monetary_value = rng.gen_range(range.money.0..=range.money.1);
        let experience_value = rng.gen_range(range.experience.0..=range.experience.1);
        let weight = round_weight(rng.gen_range(range.weight.0..=range.weight.1));

        Ok(RollValues {
            monetary_value,
            experience_value,
            weight,
            reward_value: reward_value(experience_value, weight),
        })
    }

    /// Like [`RollTable::roll_for`] but takes a rarity name.
    pub fn roll_for_name(&self, rarity: &str, rng: &mut impl Rng) -> AnglerResult<RollValues> {
        self.roll_for(rarity.parse()?, rng)
    }

    /// Rolls a catch for a catalog template.
    pub fn roll(&self, template: &LootTemplate, rng: &mut impl Rng) -> AnglerResult<RolledLoot> {
        let values = self.roll_for(template.rarity, rng)?;
        debug!(
            name = %template.name,
            rarity = %template.rarity,
            money = values.monetary_value,
            xp = values.experience_value,
            weight = values.weight,
            reward = values.reward_value,
            "rolled loot"
        );
        Ok(values.into_loot(template.clone()))
    }
}

impl Default for RollTable {
    fn default() -> Self {
        Self {
            ranges: DEFAULT_ROLL_RANGES.into_iter().collect(),
        }
    }
}

fn validate_range(rarity: Rarity, range: &RollRange) -> AnglerResult<()> {
    if range.money.0 > range.money.1 {
        return Err(AnglerError::Configuration(format!(
            "{} money range {:?} is inverted",
            rarity, range.money
        )));
    }
    if range.experience.0 > range.experience.1 {
        return Err(AnglerError::Configuration(format!(
            "{} experience range {:?} is inverted",
            rarity, range.experience
        )));
    }
    let (lo, hi) = range.weight;
    if !lo.is_finite() || !hi.is_finite() || lo < 0.0 || lo > hi {
        return Err(AnglerError::Configuration(format!(
            "{} weight range {:?} is invalid",
            rarity, range.weight
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn has_two_decimals(weight: f64) -> bool {
        ((weight * 100.0).round() - weight * 100.0).abs() < 1e-6
    }

    #[test]
    fn test_trash_never_rewards() {
        let table = RollTable::default();
        let mut rng = create_test_rng();
        for _ in 0..500 {
            let values = table.roll_for(Rarity::Trash, &mut rng).unwrap();
            assert_eq!(values.experience_value, 0);
            assert_eq!(values.reward_value, 0);
            assert!((1..=9).contains(&values.monetary_value));
            assert!(values.weight >= 0.10 && values.weight <= 0.90);
        }
    }

    #[test]
    fn test_roll_for_name_trash() {
        let table = RollTable::default();
        let mut rng = create_test_rng();
        let values = table.roll_for_name("Trash", &mut rng).unwrap();
        assert_eq!(values.experience_value, 0);
        assert_eq!(values.reward_value, 0);
    }

    #[test]
    fn test_legendary_ranges() {
        let table = RollTable::default();
        let mut rng = create_test_rng();
        for _ in 0..500 {
            let values = table.roll_for(Rarity::Legendary, &mut rng).unwrap();
            assert!(
                (5001..=10_000).contains(&values.monetary_value),
                "Legendary money {} out of range",
                values.monetary_value
            );
            assert!(
                (3501..=5000).contains(&values.experience_value),
                "Legendary XP {} out of range",
                values.experience_value
            );
            assert!(
                values.weight >= 50.10 && values.weight <= 60.00,
                "Legendary weight {} out of range",
                values.weight
            );
        }
    }

    #[test]
    fn test_every_rarity_stays_in_bounds() {
        let table = RollTable::default();
        let mut rng = create_test_rng();
        for (rarity, range) in DEFAULT_ROLL_RANGES {
            for _ in 0..200 {
                let values = table.roll_for(rarity, &mut rng).unwrap();
                assert!(values.monetary_value >= range.money.0);
                assert!(values.monetary_value <= range.money.1);
                assert!(values.experience_value >= range.experience.0);
                assert!(values.experience_value <= range.experience.1);
                assert!(
                    values.weight >= range.weight.0 && values.weight <= range.weight.1,
                    "{} weight {} outside {:?}",
                    rarity,
                    values.weight,
                    range.weight
                );
                assert!(has_two_decimals(values.weight));
                assert_eq!(
                    values.reward_value,
                    reward_value(values.experience_value, values.weight)
                );
            }
        }
    }

    #[test]
    fn test_reward_value_examples() {
        assert_eq!(reward_value(80, 3.0), 120);
        assert_eq!(reward_value(0, 55.5), 0);
        assert_eq!(reward_value(100, 1.03), 52);
    }

    #[test]
    fn test_reward_value_rounds_half_to_even() {
        assert_eq!(reward_value(1, 1.0), 0);
        assert_eq!(reward_value(3, 1.0), 2);
        assert_eq!(reward_value(5, 1.0), 2);
        assert_eq!(reward_value(7, 1.0), 4);
    }

    #[test]
    fn test_missing_range_is_unknown_rarity() {
        let table = RollTable::new(vec![DEFAULT_ROLL_RANGES[1]]).unwrap();
        let mut rng = create_test_rng();
        assert!(table.roll_for(Rarity::Common, &mut rng).is_ok());
        let err = table.roll_for(Rarity::Epic, &mut rng).unwrap_err();
        assert!(matches!(err, AnglerError::UnknownRarity(ref name) if name == "Epic"));
    }

    #[test]
    fn test_unknown_rarity_name() {
        let table = RollTable::default();
        let mut rng = create_test_rng();
        assert!(matches!(
            table.roll_for_name("Golden", &mut rng),
            Err(AnglerError::UnknownRarity(_))
        ));
    }

    #[test]
    fn test_roll_attaches_template() {
        let table = RollTable::default();
        let mut rng = create_test_rng();
        let template = LootTemplate::new("Bass", Rarity::Common, "A popular sport fish.");
        let loot = table.roll(&template, &mut rng).unwrap();
        assert_eq!(loot.template, template);
        assert_eq!(loot.rarity(), Rarity::Common);
        assert!((50..=100).contains(&loot.experience_value));
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        let bad_money = RollRange::new((10, 5), (0, 0), (0.1, 0.2));
        assert!(matches!(
            RollTable::new(vec![(Rarity::Trash, bad_money)]),
            Err(AnglerError::Configuration(_))
        ));

        let bad_weight = RollRange::new((1, 5), (0, 0), (0.9, 0.1));
        assert!(matches!(
            RollTable::new(vec![(Rarity::Trash, bad_weight)]),
            Err(AnglerError::Configuration(_))
        ));
    }

    #[test]
    fn test_duplicate_range_rejected() {
        let range = DEFAULT_ROLL_RANGES[0].1;
        assert!(matches!(
            RollTable::new(vec![(Rarity::Trash, range), (Rarity::Trash, range)]),
            Err(AnglerError::Configuration(_))
        ));
    }

    #[test]
    fn test_default_covers_every_rarity() {
        let table = RollTable::default();
        assert_eq!(table.rarities().collect::<Vec<_>>(), Rarity::ALL.to_vec());
    }
}
