//! Aggregation pipeline: refresh each distributor, merge into a master
//! library, then produce the requested text reports.

use crate::distributor::{Distributor, JsonDistributor, Steam};
use crate::error::{PickerError, Result};
use crate::formatters::{format_library_table, format_pick, format_stats, NO_GAMES_MESSAGE};
use picker_common::{Library, LibraryError};
use std::path::PathBuf;

/// What a single run should read, write and print
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory with `steam.cred`; `None` leaves Steam out
    pub steam_credentials_dir: Option<PathBuf>,
    /// `(name, path)` pairs for flat-file distributors
    pub json_sources: Vec<(String, PathBuf)>,
    /// Snapshot to seed the master library with
    pub load_path: Option<PathBuf>,
    /// Where to write the merged master library
    pub save_path: Option<PathBuf>,
    pub list: bool,
    pub read_library: bool,
    pub pick_game: bool,
    pub unplayed_only: bool,
}

/// Outcome of merging a set of distributors
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Names of distributors whose games made it into the master library
    pub merged: Vec<String>,
    /// Distributors that failed, with the reason
    pub skipped: Vec<(String, PickerError)>,
}

/// Connect (if needed) and populate one distributor
fn refresh(distributor: &mut dyn Distributor) -> Result<()> {
    if !distributor.is_connected() {
        distributor.establish_connection()?;
    }
    distributor.populate_library()
}

/// Refresh every distributor in order and merge the ones that succeed.
///
/// A failing distributor is logged and skipped; the rest still merge.
pub fn merge_distributors(
    master: &mut Library,
    distributors: &mut [Box<dyn Distributor>],
) -> MergeReport {
    let mut report = MergeReport::default();

    for distributor in distributors.iter_mut() {
        let name = distributor.name().to_string();
        match refresh(distributor.as_mut()) {
            Ok(()) => {
                let before = master.len();
                master.merge_from(distributor.source().library());
                log::info!(
                    "Merged {} games from {} ({} new titles)",
                    distributor.source().len(),
                    name,
                    master.len() - before
                );
                report.merged.push(name);
            }
            Err(e) => {
                log::warn!("Skipping distributor {}: {}", name, e);
                report.skipped.push((name, e));
            }
        }
    }

    report
}

/// Build a fresh master library from the given distributors
pub fn build_master_library(distributors: &mut [Box<dyn Distributor>]) -> (Library, MergeReport) {
    let mut master = Library::new();
    let report = merge_distributors(&mut master, distributors);
    (master, report)
}

/// Pick a title and describe it, or explain that nothing can be picked
pub fn pick_report(library: &Library, unplayed_only: bool) -> Result<String> {
    let picked = if unplayed_only {
        library.choose_random_unplayed()
    } else {
        library.choose_random()
    };

    match picked {
        Ok(game) => Ok(format_pick(game)),
        Err(LibraryError::EmptyLibrary) => {
            log::info!("No games available to pick from");
            Ok(NO_GAMES_MESSAGE.to_string())
        }
        Err(e) => Err(e.into()),
    }
}

/// Distributors named by the options. Sources that cannot even be
/// constructed are returned as skipped.
pub fn distributors_from_options(
    options: &RunOptions,
) -> (Vec<Box<dyn Distributor>>, Vec<(String, PickerError)>) {
    let mut distributors: Vec<Box<dyn Distributor>> = Vec::new();
    let mut skipped = Vec::new();

    if let Some(dir) = &options.steam_credentials_dir {
        match Steam::from_credentials_dir(dir) {
            Ok(steam) => distributors.push(Box::new(steam)),
            Err(e) => {
                log::warn!("Skipping distributor {}: {}", Steam::DEFAULT_NAME, e);
                skipped.push((Steam::DEFAULT_NAME.to_string(), e));
            }
        }
    }

    for (name, path) in &options.json_sources {
        distributors.push(Box::new(JsonDistributor::new(name.clone(), path.clone())));
    }

    (distributors, skipped)
}

/// Run the whole pipeline and return the text to print
pub fn run(options: &RunOptions) -> Result<String> {
    let mut master = match &options.load_path {
        Some(path) => Library::from_file(path)?,
        None => Library::new(),
    };

    let (mut distributors, construction_failures) = distributors_from_options(options);
    let mut report = merge_distributors(&mut master, &mut distributors);
    report.skipped.extend(construction_failures);

    if !report.skipped.is_empty() {
        log::warn!(
            "{} distributor(s) skipped: {}",
            report.skipped.len(),
            report
                .skipped
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    if let Some(path) = &options.save_path {
        master.save(path)?;
    }

    let mut output = String::new();
    if options.list {
        output.push_str(&format_library_table(&master));
    }
    if options.read_library {
        output.push_str(&format_stats(&master));
        output.push('\n');
    }
    if options.pick_game {
        output.push_str(&pick_report(&master, options.unplayed_only)?);
        output.push('\n');
    }

    Ok(output)
}
