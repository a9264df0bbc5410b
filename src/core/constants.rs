// Rarity table validation
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

// Ledger storage
pub const DATA_DIR_NAME: &str = ".angler";
pub const LEDGER_FILENAME: &str = "players.json";
pub const LEDGER_INDENT: &[u8] = b"   "; // legacy documents use three spaces
pub const LOCK_EXTENSION: &str = "lock";

// Environment overrides
pub const LEDGER_ENV_VAR: &str = "ANGLER_LEDGER";
pub const LOG_ENV_VAR: &str = "ANGLER_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Leaderboard
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;
