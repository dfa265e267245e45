//! Game sources ("distributors") that feed the master library
//!
//! Every store gets its own [`Distributor`] implementation. An adapter
//! fills a private [`SourceLibrary`] whose games are all tagged with the
//! adapter's name; the pipeline only ever reads that library.

mod credentials;
mod json_file;
mod steam;

pub use credentials::Credentials;
pub use json_file::JsonDistributor;
pub use steam::Steam;

use crate::error::Result;
use picker_common::{Game, Library};

/// Per-source library whose games are tagged with the source's name
#[derive(Debug, Clone)]
pub struct SourceLibrary {
    name: String,
    library: Library,
}

impl SourceLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            library: Library::new(),
        }
    }

    /// Source identifier attached to every game added here
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a title owned on this source
    pub fn add_game(&mut self, title: impl Into<String>, played: bool) {
        self.library.add_game(
            Game::new(title)
                .with_distributor(self.name.clone())
                .with_played(played),
        );
    }

    /// All titles known to this source, sorted
    pub fn get_titles(&self) -> Vec<&str> {
        self.library.titles()
    }

    /// Look up a title; `None` when this source does not own it
    pub fn get_game(&self, title: &str) -> Option<&Game> {
        self.library.get_game(title)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Drop every game, ready for a fresh population
    pub fn clear(&mut self) {
        self.library = Library::new();
    }

    pub fn len(&self) -> usize {
        self.library.len()
    }

    pub fn is_empty(&self) -> bool {
        self.library.is_empty()
    }
}

/// A store or export that can report which games the user owns
pub trait Distributor {
    /// Source identifier, e.g. `steam`
    fn name(&self) -> &str;

    /// Whether [`establish_connection`](Self::establish_connection) succeeded
    fn is_connected(&self) -> bool;

    /// Authenticate or otherwise prepare the source for reading
    fn establish_connection(&mut self) -> Result<()>;

    /// Replace the source library with the games currently owned
    fn populate_library(&mut self) -> Result<()>;

    /// The games read by the last population
    fn source(&self) -> &SourceLibrary;
}
