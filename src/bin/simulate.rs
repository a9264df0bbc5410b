//! Drop-rate simulator CLI.
//!
//! Draws many catches and compares observed rarity frequencies and average
//! rewards against the configured tables. No player data is read or written.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 100k catches, default tables
//!   cargo run --bin simulate -- -n 1000000 -s 42      # Reproducible large run
//!   cargo run --bin simulate -- --config angler.toml  # Check a tuned economy

use std::path::PathBuf;
use std::process::ExitCode;

use angler::core::Settings;
use angler::fishing::LootCatalog;
use angler::simulator::{run_simulation, SimConfig};
use angler::utils::logging::init_logging;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let (config, settings_path, write_json) = parse_args(&args);
    init_logging();

    let settings = match Settings::load(settings_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let economy = &settings.economy;
    let tables = economy
        .distribution()
        .and_then(|dist| economy.roll_table().map(|rolls| (dist, rolls)));
    let (distribution, rolls) = match tables {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let catalog = LootCatalog::default();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ANGLER DROP RATE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Catches:        {}", config.num_catches);
    if let Some(path) = &settings_path {
        println!("  Economy:        {}", path.display());
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config, &distribution, &catalog, &rolls);

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> (SimConfig, Option<PathBuf>, bool) {
    let mut config = SimConfig::default();
    let mut settings_path = None;
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--catches" => {
                if i + 1 < args.len() {
                    config.num_catches = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    settings_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--json" => {
                write_json = true;
            }
            "--quick" => {
                let seed = config.seed;
                config = SimConfig::quick();
                config.seed = seed;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, settings_path, write_json)
}

fn print_help() {
    println!("Angler Drop Rate Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --catches <N>    Number of catches to draw (default: 100000)");
    println!("    -s, --seed <N>       Random seed for reproducibility");
    println!("    -c, --config <FILE>  TOML settings file with an [economy] table");
    println!("    --quick              Quick check (10000 catches)");
    println!("    --json               Save the report as JSON");
    println!("    -h, --help           Show this help");
}
