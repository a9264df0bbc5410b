//! Command-line front-end for the catch engine.
//!
//! Usage:
//!   angler [--config FILE] [--ledger PATH] <COMMAND>
//!
//! Every engine failure is printed as a message and exits non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use angler::build_info;
use angler::core::constants::DEFAULT_LEADERBOARD_SIZE;
use angler::core::Settings;
use angler::fishing::LootCatalog;
use angler::ledger::JsonFileStore;
use angler::progression::progress_to_next_rank;
use angler::utils::logging::init_logging;
use angler::{Angler, AnglerError, CatchResult, LedgerField, PlayerLedger, PlayerRecord};
use tracing::error;

enum Command {
    Fish(u64),
    Profile(u64),
    Leaderboard(String, usize),
    Reset(u64, String),
    Delete(u64),
    DeleteAll,
}

struct CliArgs {
    config: Option<PathBuf>,
    ledger: Option<PathBuf>,
    command: Command,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("{}", build_info::version_line());
        return ExitCode::SUCCESS;
    }
    if args.len() < 2 || args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return ExitCode::SUCCESS;
    }

    init_logging();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run `angler --help` for usage.");
            return ExitCode::from(2);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{}", user_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn parse_id(value: Option<&String>) -> Result<u64, String> {
    let value = value.ok_or("missing player id")?;
    value
        .parse()
        .map_err(|_| format!("invalid player id: {:?}", value))
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut config = None;
    let mut ledger = None;
    let mut rest = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                config = Some(PathBuf::from(args.get(i + 1).ok_or("--config needs a file")?));
                i += 1;
            }
            "-l" | "--ledger" => {
                ledger = Some(PathBuf::from(args.get(i + 1).ok_or("--ledger needs a path")?));
                i += 1;
            }
            _ => rest.push(args[i].clone()),
        }
        i += 1;
    }

    let name = rest.first().ok_or("missing command")?;
    let command = match name.as_str() {
        "fish" => Command::Fish(parse_id(rest.get(1))?),
        "profile" => Command::Profile(parse_id(rest.get(1))?),
        "leaderboard" => {
            let field = rest.get(1).ok_or("leaderboard needs a field (money or level)")?;
            let size = match rest.get(2) {
                Some(n) => n.parse().map_err(|_| format!("invalid size: {:?}", n))?,
                None => DEFAULT_LEADERBOARD_SIZE,
            };
            Command::Leaderboard(field.clone(), size)
        }
        "reset" => {
            let id = parse_id(rest.get(1))?;
            let field = rest.get(2).ok_or("reset needs a field (money or level)")?;
            Command::Reset(id, field.clone())
        }
        "delete" => Command::Delete(parse_id(rest.get(1))?),
        "delete-all" => Command::DeleteAll,
        other => return Err(format!("unknown command: {}", other)),
    };

    Ok(CliArgs {
        config,
        ledger,
        command,
    })
}

fn build_engine(cli: &CliArgs) -> Result<Angler<JsonFileStore>, AnglerError> {
    let settings = Settings::load(cli.config.as_deref())?.with_env_overrides();
    match &cli.ledger {
        Some(path) => Angler::new(
            &settings.economy,
            LootCatalog::default(),
            PlayerLedger::open(path.clone()),
        ),
        None => Angler::from_settings(&settings),
    }
}

fn run(cli: CliArgs) -> Result<(), AnglerError> {
    let angler = build_engine(&cli)?;

    match cli.command {
        Command::Fish(id) => print_catch(&angler.catch(id)?),
        Command::Profile(id) => print_profile(&angler.get_player(id)?),
        Command::Leaderboard(field, size) => {
            let field: LedgerField = field.parse()?;
            let ranking = angler.top(field, size)?;
            print_leaderboard(field, &ranking);
        }
        Command::Reset(id, field) => {
            let record = angler.reset_player_field(id, &field)?;
            println!("Player {} {} was reset.", id, field);
            print_profile(&record);
        }
        Command::Delete(id) => {
            angler.delete_player(id)?;
            println!("Player {} has been deleted.", id);
        }
        Command::DeleteAll => {
            angler.delete_all_players()?;
            println!("All player data has been deleted.");
        }
    }
    Ok(())
}

fn user_message(e: &AnglerError) -> String {
    match e {
        AnglerError::NoCatchAvailable(_) => "No catch available. Please try again!".to_string(),
        AnglerError::PlayerNotFound(id) => {
            format!("Player {} not found. Please check the player ID.", id)
        }
        AnglerError::InvalidField(field) => {
            format!("Unknown field {:?}. Use money or level.", field)
        }
        AnglerError::StorageUnavailable(_) => {
            "Something went wrong while saving. Nothing was changed.".to_string()
        }
        other => other.to_string(),
    }
}

fn print_catch(result: &CatchResult) {
    let loot = &result.loot;
    println!("You've caught: {}", loot.template.name);
    println!("  {}", loot.template.description);
    println!("  Rarity      : {}", loot.rarity());
    println!("  Weight      : {:.2} KG", loot.weight);
    println!("  Gold earned : {}$", loot.reward_value);
    println!("  XP earned   : {} XP", loot.experience_value);
    if result.ranked_up() {
        println!("  New rank    : {}!", result.player.rank());
    }
}

fn print_profile(record: &PlayerRecord) {
    println!("Player {}", record.player_id());
    println!("  Money : {}$", record.money());
    println!("  XP    : {} XP", record.experience());
    println!("  Rank  : {}", record.rank());
    if let Some(needed) = progress_to_next_rank(record.experience()) {
        println!("  Next  : {} XP to go", needed);
    }
}

fn print_leaderboard(field: LedgerField, ranking: &[(u64, u64)]) {
    if ranking.is_empty() {
        println!("The leaderboard is empty.");
        return;
    }
    println!("Leaderboard by {}:", field);
    for (position, (id, value)) in ranking.iter().enumerate() {
        match field {
            LedgerField::Money => println!("{:>3}. {} - {}$", position + 1, id, value),
            LedgerField::Experience => println!("{:>3}. {} - {} XP", position + 1, id, value),
        }
    }
}

fn print_help() {
    println!("Angler - catch fish, earn gold, climb the ranks");
    println!();
    println!("USAGE:");
    println!("    angler [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    fish <ID>                       Catch a random fish for a player");
    println!("    profile <ID>                    Show a player's money, XP, and rank");
    println!("    leaderboard <money|level> [N]   Show the top N players (default 10)");
    println!("    reset <ID> <money|level>        Reset one of a player's stats");
    println!("    delete <ID>                     Delete a player");
    println!("    delete-all                      Delete every player");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>   TOML settings file");
    println!("    -l, --ledger <PATH>   Ledger file (default ~/.angler/players.json)");
    println!("    -v, --version         Print version");
    println!("    -h, --help            Show this help");
    println!();
    println!("ENVIRONMENT:");
    println!("    ANGLER_LEDGER   Ledger file, used when --ledger is not given");
    println!("    ANGLER_LOG      Log filter (default: info)");
}
