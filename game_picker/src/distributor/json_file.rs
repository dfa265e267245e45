//! Flat-file distributor backed by a JSON library snapshot
//!
//! Used for stores without an API: their library page is exported once to
//! a snapshot file, and this distributor re-tags every game in it with its
//! own name when loading.

use super::{Distributor, SourceLibrary};
use crate::error::{PickerError, Result};
use picker_common::Library;
use std::path::{Path, PathBuf};

/// Games read from a JSON snapshot file
#[derive(Debug, Clone)]
pub struct JsonDistributor {
    source: SourceLibrary,
    path: PathBuf,
    connected: bool,
}

impl JsonDistributor {
    pub const DEFAULT_NAME: &'static str = "jsondistributor";

    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            source: SourceLibrary::new(name),
            path: path.into(),
            connected: false,
        }
    }

    /// Distributor named after its type
    pub fn unnamed(path: impl Into<PathBuf>) -> Self {
        Self::new(Self::DEFAULT_NAME, path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Distributor for JsonDistributor {
    fn name(&self) -> &str {
        self.source.name()
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn establish_connection(&mut self) -> Result<()> {
        if !self.path().is_file() {
            return Err(PickerError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("library export not found: {}", self.path().display()),
            )));
        }
        self.connected = true;
        Ok(())
    }

    fn populate_library(&mut self) -> Result<()> {
        if !self.connected {
            return Err(PickerError::NotConnected(self.name().to_string()));
        }

        let exported = Library::from_file(self.path())?;

        self.source.clear();
        for game in exported.sorted_games() {
            self.source.add_game(game.name.clone(), game.played);
        }

        log::info!(
            "Loaded {} games from {} ({})",
            self.source.len(),
            self.name(),
            self.path().display()
        );
        Ok(())
    }

    fn source(&self) -> &SourceLibrary {
        &self.source
    }
}
