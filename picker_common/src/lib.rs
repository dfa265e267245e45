//! Picker Common - shared game library model
//!
//! Games, the title-keyed [`Library`] with its dedup-by-title merge rule,
//! random selection, and the JSON snapshot codec used to persist libraries.

pub mod codec;
pub mod error;
pub mod game;
pub mod library;
pub mod selector;

pub use codec::Record;
pub use error::{LibraryError, Result};
pub use game::Game;
pub use library::Library;
