//! Game Picker - Master PC Game Library
//!
//! Pulls owned games from several distributors (Steam Web API, JSON exports
//! of store library pages), merges them by title into one master library,
//! and reports stats or picks something to play.

pub mod app;
pub mod distributor;
pub mod error;
pub mod formatters;

pub use app::{build_master_library, merge_distributors, pick_report, run, MergeReport, RunOptions};
pub use distributor::{Credentials, Distributor, JsonDistributor, SourceLibrary, Steam};
pub use error::{Error, PickerError, Result};
pub use formatters::{format_library_table, format_pick, format_stats, NO_GAMES_MESSAGE};
