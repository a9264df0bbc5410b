//! Fishing data structures: rarity tiers, catalog entries, and rolled catches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnglerError;

/// Rarity tiers for catches, ordered from least to most valuable.
///
/// Deserializes through [`FromStr`], so config files may use any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Rarity {
    Trash = 0,
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Supreme = 5,
    Mythical = 6,
    Legendary = 7,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 8] = [
        Rarity::Trash,
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Supreme,
        Rarity::Mythical,
        Rarity::Legendary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Trash => "Trash",
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Supreme => "Supreme",
            Rarity::Mythical => "Mythical",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rarity {
    type Err = AnglerError;

    /// Parses a tier name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Rarity::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnglerError::UnknownRarity(s.to_string()))
    }
}

impl TryFrom<String> for Rarity {
    type Error = AnglerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootTemplate {
    pub name: String,
    pub rarity: Rarity,
    pub description: String,
}

impl LootTemplate {
    pub fn new(name: impl Into<String>, rarity: Rarity, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rarity,
            description: description.into(),
        }
    }
}

/// Inclusive roll bounds for one rarity.
///
/// Weight bounds are in kilograms with two-decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollRange {
    pub money: (u64, u64),
    pub experience: (u64, u64),
    pub weight: (f64, f64),
}

impl RollRange {
    pub const fn new(money: (u64, u64), experience: (u64, u64), weight: (f64, f64)) -> Self {
        Self {
            money,
            experience,
            weight,
        }
    }
}

/// One catch, freshly rolled. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledLoot {
    pub template: LootTemplate,
    /// Rolled but not credited; the player is paid `reward_value`.
    pub monetary_value: u64,
    pub experience_value: u64,
    pub weight: f64,
    pub reward_value: u64,
}

impl RolledLoot {
    pub fn rarity(&self) -> Rarity {
        self.template.rarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_parse_is_case_insensitive() {
        assert_eq!("legendary".parse::<Rarity>().unwrap(), Rarity::Legendary);
        assert_eq!(" TRASH ".parse::<Rarity>().unwrap(), Rarity::Trash);
        assert_eq!("Mythical".parse::<Rarity>().unwrap(), Rarity::Mythical);
    }

    #[test]
    fn test_rarity_parse_unknown_is_error() {
        let err = "Shiny".parse::<Rarity>().unwrap_err();
        assert!(matches!(err, AnglerError::UnknownRarity(ref name) if name == "Shiny"));
    }

    #[test]
    fn test_rarity_order_matches_value() {
        for pair in Rarity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Rarity::Legendary as usize, Rarity::ALL.len() - 1);
    }

    #[test]
    fn test_rarity_display_roundtrips_through_parse() {
        for rarity in Rarity::ALL {
            assert_eq!(rarity.to_string().parse::<Rarity>().unwrap(), rarity);
        }
    }

    #[test]
    fn test_rarity_deserializes_any_case() {
        let parsed: Vec<Rarity> = serde_json::from_str(r#"["trash", "EPIC", "Legendary"]"#).unwrap();
        assert_eq!(parsed, vec![Rarity::Trash, Rarity::Epic, Rarity::Legendary]);
        assert!(serde_json::from_str::<Rarity>(r#""Shiny""#).is_err());
    }

    #[test]
    fn test_rarity_serializes_canonical_name() {
        assert_eq!(serde_json::to_string(&Rarity::Mythical).unwrap(), r#""Mythical""#);
    }
}
