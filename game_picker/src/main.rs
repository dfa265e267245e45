//! Game Picker - Master PC Game Library & Picker
//!
//! Merges owned games from the configured distributors and prints stats
//! or a random pick.

use clap::Parser;
use game_picker::{run, RunOptions};
use std::path::PathBuf;

/// Master PC game library & picker
#[derive(Parser, Debug)]
#[command(name = "game_picker")]
#[command(version, about, long_about = None)]
struct Args {
    /// Echo the master library stats to the console
    #[arg(short, long, default_value_t = false)]
    read_library: bool,

    /// Select a game at random and echo it to the console
    #[arg(short, long, default_value_t = false)]
    pick_game: bool,

    /// Only pick among games that were never played
    #[arg(long, default_value_t = false)]
    unplayed: bool,

    /// Print every game in the master library
    #[arg(short, long, default_value_t = false)]
    list: bool,

    /// Include owned games from the Steam Web API
    #[arg(long, default_value_t = false)]
    steam: bool,

    /// Add a JSON library export as a distributor, e.g. `gog=gog.json`
    #[arg(long = "json-source", value_name = "NAME=PATH", value_parser = parse_json_source)]
    json_sources: Vec<(String, PathBuf)>,

    /// Directory holding `<distributor>.cred` files
    #[arg(long, default_value_t = default_credentials_dir())]
    credentials_dir: String,

    /// Seed the master library from a saved snapshot
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the merged master library to this file
    #[arg(long)]
    save: Option<PathBuf>,
}

/// Returns the default credentials directory: ~/.config/game_picker
fn default_credentials_dir() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("game_picker")
        .to_string_lossy()
        .to_string()
}

fn parse_json_source(value: &str) -> Result<(String, PathBuf), String> {
    match value.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(path.trim())))
        }
        _ => Err(format!("expected NAME=PATH, got '{}'", value)),
    }
}

impl From<Args> for RunOptions {
    fn from(args: Args) -> Self {
        RunOptions {
            steam_credentials_dir: args.steam.then(|| PathBuf::from(&args.credentials_dir)),
            json_sources: args.json_sources,
            load_path: args.load,
            save_path: args.save,
            list: args.list,
            read_library: args.read_library,
            pick_game: args.pick_game,
            unplayed_only: args.unplayed,
        }
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=game_picker=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("Arguments: {:?}", args);

    match run(&args.into()) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            log::error!("Game picker failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
