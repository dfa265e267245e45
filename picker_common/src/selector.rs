//! Random title selection.
//!
//! Candidates are ordered by title before choosing so a seeded RNG gives
//! the same pick for the same library contents.

use crate::error::{LibraryError, Result};
use crate::game::Game;
use crate::library::Library;
use rand::seq::SliceRandom;
use rand::Rng;

/// Choose any game uniformly
pub fn choose<'a, R: Rng + ?Sized>(library: &'a Library, rng: &mut R) -> Result<&'a Game> {
    library
        .sorted_games()
        .choose(rng)
        .copied()
        .ok_or(LibraryError::EmptyLibrary)
}

/// Choose uniformly among games that were never played
pub fn choose_unplayed<'a, R: Rng + ?Sized>(
    library: &'a Library,
    rng: &mut R,
) -> Result<&'a Game> {
    let candidates: Vec<&Game> = library
        .sorted_games()
        .into_iter()
        .filter(|game| !game.played)
        .collect();

    candidates
        .choose(rng)
        .copied()
        .ok_or(LibraryError::EmptyLibrary)
}
