//! Title-keyed game library with dedup-by-title merging

use crate::codec::{self, Record};
use crate::error::Result;
use crate::game::Game;
use crate::selector;
use rand::Rng;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// A collection of games keyed by title.
///
/// Every key equals the `name` of the game stored under it. Adding a title
/// that is already present only widens its `distributors`; the stored
/// `played` flag is never overwritten.
#[derive(Debug, Clone, Default)]
pub struct Library {
    games: HashMap<String, Game>,
    /// Snapshot entries that were not tagged as games, written back on save
    unrecognized: BTreeMap<String, Value>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from an already decoded snapshot document
    pub(crate) fn from_records(document: BTreeMap<String, Record>) -> Self {
        let mut library = Self::new();
        for (key, record) in document {
            match record {
                Record::Game(game) => {
                    if game.name != key {
                        log::warn!(
                            "Snapshot key {:?} does not match game name {:?}, keying by name",
                            key,
                            game.name
                        );
                    }
                    library.add_game(game);
                }
                Record::Unrecognized(_) if library.games.contains_key(&key) => {
                    log::warn!(
                        "Dropping untagged snapshot entry {:?}, a game now uses that title",
                        key
                    );
                }
                Record::Unrecognized(value) => {
                    log::warn!("Keeping untagged snapshot entry {:?} as-is", key);
                    library.unrecognized.insert(key, value);
                }
            }
        }
        library
    }

    /// Load a library from a snapshot file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut library = Self::new();
        library.load(path)?;
        Ok(library)
    }

    /// Insert a game, or union its sources into the existing entry for that title.
    ///
    /// A new title replaces any untagged snapshot entry stored under the same key.
    pub fn add_game(&mut self, game: Game) {
        match self.games.get_mut(&game.name) {
            Some(existing) => existing.absorb_distributors(&game),
            None => {
                if self.unrecognized.remove(&game.name).is_some() {
                    log::warn!(
                        "Game {:?} replaces the untagged snapshot entry with that key",
                        game.name
                    );
                }
                self.games.insert(game.name.clone(), game);
            }
        }
    }

    /// Fold every game of `source` into this library
    pub fn merge_from(&mut self, source: &Library) {
        for game in source.games.values() {
            self.add_game(game.clone());
        }
    }

    /// Merge several source libraries, in order
    pub fn merge_from_many<'a, I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = &'a Library>,
    {
        for source in sources {
            self.merge_from(source);
        }
    }

    pub fn get_game(&self, title: &str) -> Option<&Game> {
        self.games.get(title)
    }

    /// All titles, sorted
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.games.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    /// Iterate games in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.values()
    }

    /// Games sorted by title
    pub fn sorted_games(&self) -> Vec<&Game> {
        let mut games: Vec<&Game> = self.games.values().collect();
        games.sort_by(|a, b| a.name.cmp(&b.name));
        games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Count all games, or only the unplayed ones
    pub fn total_games(&self, unplayed_only: bool) -> usize {
        if unplayed_only {
            self.games.values().filter(|game| !game.played).count()
        } else {
            self.games.len()
        }
    }

    /// Every source identifier referenced by any game
    pub fn distinct_distributors(&self) -> BTreeSet<&str> {
        self.games
            .values()
            .flat_map(|game| game.distributors.iter().map(String::as_str))
            .collect()
    }

    /// Entries from the last loaded snapshot that were not games
    pub fn unrecognized(&self) -> &BTreeMap<String, Value> {
        &self.unrecognized
    }

    /// Pick a game uniformly at random
    pub fn choose_random(&self) -> Result<&Game> {
        selector::choose(self, &mut rand::thread_rng())
    }

    /// Pick a game uniformly at random from the unplayed titles only
    pub fn choose_random_unplayed(&self) -> Result<&Game> {
        selector::choose_unplayed(self, &mut rand::thread_rng())
    }

    /// Pick a game using a caller supplied RNG
    pub fn choose_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Game> {
        selector::choose(self, rng)
    }

    /// Write this library as a JSON snapshot, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        codec::write_library(&mut writer, self)?;
        writer.flush()?;

        log::info!("Saved library with {} games to {}", self.len(), path.display());
        Ok(())
    }

    /// Replace the contents of this library with a JSON snapshot.
    ///
    /// On error the library is left unchanged.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        *self = codec::read_library(reader)?;

        log::info!(
            "Loaded library with {} games from {}",
            self.len(),
            path.display()
        );
        Ok(())
    }
}

impl PartialEq for Library {
    fn eq(&self, other: &Self) -> bool {
        self.games == other.games
    }
}

impl FromIterator<Game> for Library {
    fn from_iter<I: IntoIterator<Item = Game>>(iter: I) -> Self {
        let mut library = Self::new();
        for game in iter {
            library.add_game(game);
        }
        library
    }
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod tests;
