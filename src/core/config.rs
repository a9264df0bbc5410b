//! Economy tables and settings, loaded once at startup.
//!
//! Everything here is validated before an engine is built, so a bad table
//! fails at startup rather than on the first catch.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::constants::{LEDGER_ENV_VAR, LEDGER_FILENAME};
use crate::error::{AnglerError, AnglerResult};
use crate::fishing::{
    Rarity, RarityDistribution, RollRange, RollTable, DEFAULT_RARITY_WEIGHTS, DEFAULT_ROLL_RANGES,
};
use crate::utils::persistence;

/// One row of the rarity weight table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityWeight {
    pub rarity: Rarity,
    pub weight: f64,
}

/// One row of the roll-range table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityRanges {
    pub rarity: Rarity,
    pub money: (u64, u64),
    pub experience: (u64, u64),
    pub weight: (f64, f64),
}

impl From<RarityRanges> for (Rarity, RollRange) {
    fn from(row: RarityRanges) -> Self {
        (
            row.rarity,
            RollRange::new(row.money, row.experience, row.weight),
        )
    }
}

fn default_rarities() -> Vec<RarityWeight> {
    DEFAULT_RARITY_WEIGHTS
        .iter()
        .map(|(rarity, weight)| RarityWeight {
            rarity: *rarity,
            weight: *weight,
        })
        .collect()
}

fn default_ranges() -> Vec<RarityRanges> {
    DEFAULT_ROLL_RANGES
        .iter()
        .map(|(rarity, range)| RarityRanges {
            rarity: *rarity,
            money: range.money,
            experience: range.experience,
            weight: range.weight,
        })
        .collect()
}

/// Rarity weights and roll ranges.
///
/// Either table may be omitted from a TOML file, in which case the built-in
/// table is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyConfig {
    #[serde(default = "default_rarities")]
    pub rarities: Vec<RarityWeight>,
    #[serde(default = "default_ranges")]
    pub ranges: Vec<RarityRanges>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            rarities: default_rarities(),
            ranges: default_ranges(),
        }
    }
}

impl EconomyConfig {
    /// Parses and validates a TOML economy table.
    pub fn from_toml_str(source: &str) -> AnglerResult<Self> {
        let config: EconomyConfig = toml::from_str(source)
            .map_err(|e| AnglerError::Configuration(format!("economy config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AnglerResult<Self> {
        let source = read_config_file(path)?;
        Self::from_toml_str(&source)
    }

    /// Fails with `Configuration` if either table would be rejected.
    pub fn validate(&self) -> AnglerResult<()> {
        self.distribution()?;
        self.roll_table()?;
        Ok(())
    }

    pub fn distribution(&self) -> AnglerResult<RarityDistribution> {
        RarityDistribution::new(self.rarities.iter().map(|r| (r.rarity, r.weight)).collect())
    }

    pub fn roll_table(&self) -> AnglerResult<RollTable> {
        RollTable::new(self.ranges.iter().copied().map(Into::into).collect())
    }
}

/// Process settings read from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Ledger document location. Defaults to `~/.angler/players.json`.
    #[serde(default)]
    pub ledger_path: Option<PathBuf>,
    #[serde(default)]
    pub economy: EconomyConfig,
}

impl Settings {
    pub fn from_toml_str(source: &str) -> AnglerResult<Self> {
        let settings: Settings = toml::from_str(source)
            .map_err(|e| AnglerError::Configuration(format!("settings: {}", e)))?;
        settings.economy.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> AnglerResult<Self> {
        let source = read_config_file(path)?;
        Self::from_toml_str(&source)
    }

    /// Loads settings from `path`, or defaults when no file was given.
    pub fn load(path: Option<&Path>) -> AnglerResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies process environment overrides: `ANGLER_LEDGER` replaces the
    /// ledger path from the settings file.
    pub fn with_env_overrides(self) -> Self {
        self.with_ledger_override(std::env::var_os(LEDGER_ENV_VAR))
    }

    /// Replaces the ledger path when `value` is set and non-empty.
    pub fn with_ledger_override(mut self, value: Option<OsString>) -> Self {
        if let Some(path) = value.filter(|v| !v.is_empty()) {
            self.ledger_path = Some(PathBuf::from(path));
        }
        self
    }

    /// Ledger path from these settings, or `~/.angler/players.json`.
    pub fn resolve_ledger_path(&self) -> AnglerResult<PathBuf> {
        if let Some(path) = &self.ledger_path {
            return Ok(path.clone());
        }
        persistence::data_path(LEDGER_FILENAME).map_err(|e| {
            AnglerError::Configuration(format!("cannot resolve ledger location: {}", e))
        })
    }
}

fn read_config_file(path: &Path) -> AnglerResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AnglerError::Configuration(format!("cannot read {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_economy_is_valid() {
        let config = EconomyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.distribution().unwrap(), RarityDistribution::default());
        assert_eq!(config.roll_table().unwrap(), RollTable::default());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = EconomyConfig::from_toml_str("").unwrap();
        assert_eq!(config, EconomyConfig::default());
    }

    #[test]
    fn test_custom_rarities_parse() {
        let source = r#"
            [[rarities]]
            rarity = "Trash"
            weight = 0.5

            [[rarities]]
            rarity = "Legendary"
            weight = 0.5
        "#;
        let config = EconomyConfig::from_toml_str(source).unwrap();
        let dist = config.distribution().unwrap();
        assert_eq!(dist.entries(), &[(Rarity::Trash, 0.5), (Rarity::Legendary, 0.5)]);
        // Ranges fall back to the built-in table.
        assert_eq!(config.ranges.len(), 8);
    }

    #[test]
    fn test_bad_sum_fails_fast() {
        let source = r#"
            [[rarities]]
            rarity = "Common"
            weight = 0.7
        "#;
        assert!(matches!(
            EconomyConfig::from_toml_str(source),
            Err(AnglerError::Configuration(_))
        ));
    }

    #[test]
    fn test_unknown_rarity_name_is_configuration_error() {
        let source = r#"
            [[rarities]]
            rarity = "Shiny"
            weight = 1.0
        "#;
        assert!(matches!(
            EconomyConfig::from_toml_str(source),
            Err(AnglerError::Configuration(_))
        ));
    }

    #[test]
    fn test_custom_ranges_parse() {
        let source = r#"
            [[ranges]]
            rarity = "Common"
            money = [1, 2]
            experience = [3, 4]
            weight = [1.5, 2.5]
        "#;
        let config = EconomyConfig::from_toml_str(source).unwrap();
        let table = config.roll_table().unwrap();
        let range = table.range_for(Rarity::Common).unwrap();
        assert_eq!(range.money, (1, 2));
        assert_eq!(range.experience, (3, 4));
        assert_eq!(range.weight, (1.5, 2.5));
        assert!(matches!(
            table.range_for(Rarity::Rare),
            Err(AnglerError::UnknownRarity(_))
        ));
    }

    #[test]
    fn test_settings_parse_ledger_path_and_economy() {
        let source = r#"
            ledger_path = "/tmp/angler/players.json"

            [[economy.rarities]]
            rarity = "Rare"
            weight = 1.0
        "#;
        let settings = Settings::from_toml_str(source).unwrap();
        assert_eq!(
            settings.ledger_path,
            Some(PathBuf::from("/tmp/angler/players.json"))
        );
        assert_eq!(settings.economy.rarities.len(), 1);
    }

    #[test]
    fn test_settings_load_without_file_is_default() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_settings_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Settings::load(Some(&missing)),
            Err(AnglerError::Configuration(_))
        ));
    }

    #[test]
    fn test_ledger_override_beats_settings_file() {
        let settings = Settings::from_toml_str("ledger_path = \"/srv/file.json\"").unwrap();
        let overridden = settings
            .clone()
            .with_ledger_override(Some(OsString::from("/srv/env.json")));
        assert_eq!(
            overridden.resolve_ledger_path().unwrap(),
            PathBuf::from("/srv/env.json")
        );
    }

    #[test]
    fn test_empty_or_missing_override_keeps_settings_path() {
        let settings = Settings::from_toml_str("ledger_path = \"/srv/file.json\"").unwrap();
        for value in [None, Some(OsString::new())] {
            let kept = settings.clone().with_ledger_override(value);
            assert_eq!(
                kept.resolve_ledger_path().unwrap(),
                PathBuf::from("/srv/file.json")
            );
        }
    }

    #[test]
    fn test_rarity_names_in_toml_are_case_insensitive() {
        let source = r#"
            [[rarities]]
            rarity = "trash"
            weight = 0.5

            [[rarities]]
            rarity = "LEGENDARY"
            weight = 0.5
        "#;
        let config = EconomyConfig::from_toml_str(source).unwrap();
        assert_eq!(
            config.distribution().unwrap().entries(),
            &[(Rarity::Trash, 0.5), (Rarity::Legendary, 0.5)]
        );
    }
}
