//! Catch flow integration tests
//!
//! End-to-end tests through a file-backed ledger covering:
//! - Catches crediting experience and reward value
//! - Persistence across reopen
//! - Legacy ledger files
//! - Catches that must write nothing

use angler::core::config::{EconomyConfig, RarityWeight, Settings};
use angler::fishing::{reward_value, LootCatalog, LootTemplate, Rarity, RolledLoot};
use angler::{Angler, AnglerError, PlayerLedger, Rank};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn file_angler(dir: &TempDir) -> Angler {
    Angler::with_defaults(PlayerLedger::open(dir.path().join("players.json")))
}

// ============================================================================
// Catch Tests
// ============================================================================

#[test]
fn test_first_catch_creates_ledger_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("players.json");
    assert!(!path.exists());

    let angler = file_angler(&dir);
    let result = angler.catch_with_rng(42, &mut create_test_rng()).unwrap();

    assert!(path.exists());
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n   \"STATS\": ["));
    assert!(text.contains("\"user_id\": 42"));
    assert_eq!(result.player.money(), result.loot.reward_value);
}

#[test]
fn test_forced_common_catch_persists() {
    let dir = TempDir::new().unwrap();
    let angler = file_angler(&dir);
    let loot = RolledLoot {
        template: LootTemplate::new("Goldfish", Rarity::Common, "A small golden fish."),
        monetary_value: 25,
        experience_value: 80,
        weight: 3.0,
        reward_value: reward_value(80, 3.0),
    };

    angler.credit(42, &loot).unwrap();

    let reopened = file_angler(&dir);
    let player = reopened.get_player(42).unwrap();
    assert_eq!(player.money(), 120);
    assert_eq!(player.experience(), 80);
    assert_eq!(player.rank(), Rank::Minnow);

    let text = std::fs::read_to_string(dir.path().join("players.json")).unwrap();
    assert!(text.contains("\"league\": \"Minnow\""));
}

#[test]
fn test_catches_accumulate_across_reopen() {
    let dir = TempDir::new().unwrap();
    let mut rng = create_test_rng();
    let mut money = 0;
    let mut xp = 0;

    for _ in 0..3 {
        let angler = file_angler(&dir);
        for _ in 0..10 {
            let result = angler.catch_with_rng(7, &mut rng).unwrap();
            money += result.loot.reward_value;
            xp += result.loot.experience_value;
        }
    }

    let player = file_angler(&dir).get_player(7).unwrap();
    assert_eq!(player.money(), money);
    assert_eq!(player.experience(), xp);
    assert_eq!(player.rank(), angler::rank_for(xp));
}

#[test]
fn test_trash_only_catch_leaves_player_unranked() {
    let dir = TempDir::new().unwrap();
    let config = EconomyConfig {
        rarities: vec![RarityWeight {
            rarity: Rarity::Trash,
            weight: 1.0,
        }],
        ..EconomyConfig::default()
    };
    let angler = Angler::new(
        &config,
        LootCatalog::default(),
        PlayerLedger::open(dir.path().join("players.json")),
    )
    .unwrap();

    let result = angler.catch_with_rng(3, &mut create_test_rng()).unwrap();

    assert_eq!(result.loot.rarity(), Rarity::Trash);
    assert_eq!(result.loot.experience_value, 0);
    assert_eq!(result.loot.reward_value, 0);
    assert_eq!(result.player.rank(), Rank::Unranked);
    assert!(!result.ranked_up());
}

#[test]
fn test_no_catch_available_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("players.json");
    std::fs::write(
        &path,
        r#"{"STATS":[{"user_id":1,"money":10,"level":5,"league":"Minnow"}]}"#,
    )
    .unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let config = EconomyConfig {
        rarities: vec![RarityWeight {
            rarity: Rarity::Mythical,
            weight: 1.0,
        }],
        ..EconomyConfig::default()
    };
    let catalog = LootCatalog::new(vec![LootTemplate::new("Carp", Rarity::Common, "Plain.")]);
    let angler = Angler::new(&config, catalog, PlayerLedger::open(&path)).unwrap();

    assert!(matches!(
        angler.catch_with_rng(1, &mut create_test_rng()),
        Err(AnglerError::NoCatchAvailable(Rarity::Mythical))
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

// ============================================================================
// Legacy File Tests
// ============================================================================

#[test]
fn test_legacy_file_rank_is_recomputed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("players.json");
    std::fs::write(
        &path,
        r#"{"STATS":[{"user_id":9,"money":500,"level":3500,"league":"Minnow"}]}"#,
    )
    .unwrap();

    let angler = Angler::with_defaults(PlayerLedger::open(&path));
    let player = angler.get_player(9).unwrap();

    assert_eq!(player.money(), 500);
    assert_eq!(player.experience(), 3_500);
    assert_eq!(player.rank(), Rank::Pond);
}

#[test]
fn test_malformed_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("players.json");
    std::fs::write(&path, "{ not json").unwrap();

    let angler = Angler::with_defaults(PlayerLedger::open(&path));
    let err = angler.catch_with_rng(1, &mut create_test_rng()).unwrap_err();

    assert!(matches!(err, AnglerError::StorageUnavailable(_)));
    assert!(err.is_recoverable());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

// ============================================================================
// Settings Tests
// ============================================================================

#[test]
fn test_engine_from_settings_file() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("data").join("ledger.json");
    let settings_path = dir.path().join("angler.toml");
    std::fs::write(
        &settings_path,
        format!(
            "ledger_path = {:?}\n\n[[economy.rarities]]\nrarity = \"Rare\"\nweight = 1.0\n",
            ledger.display().to_string()
        ),
    )
    .unwrap();

    let settings = Settings::from_file(&settings_path).unwrap();
    let angler = Angler::from_settings(&settings).unwrap();
    let result = angler.catch_with_rng(11, &mut create_test_rng()).unwrap();

    assert_eq!(result.loot.rarity(), Rarity::Rare);
    assert!(ledger.exists());
}
