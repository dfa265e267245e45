//! JSON snapshot codec for games and libraries
//!
//! A snapshot is an object keyed by title. Each value is a tagged record:
//!
//! ```json
//! {"__type__": "Game", "name": "Forager", "distributors": ["gog", "steam"], "played": false}
//! ```
//!
//! Values without the `Game` tag are not an error. They decode to
//! [`Record::Unrecognized`] and are carried through untouched.

use crate::error::Result;
use crate::game::Game;
use crate::library::Library;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Read, Write};

/// Field holding the type discriminator
pub const TYPE_FIELD: &str = "__type__";

/// Discriminator value for game records
pub const GAME_TAG: &str = "Game";

#[derive(Serialize)]
#[serde(tag = "__type__")]
enum TaggedGameRef<'a> {
    Game {
        name: &'a str,
        distributors: &'a BTreeSet<String>,
        played: bool,
    },
}

#[derive(Deserialize)]
#[serde(tag = "__type__")]
enum TaggedGame {
    Game {
        name: String,
        distributors: BTreeSet<String>,
        played: bool,
    },
}

impl<'a> From<&'a Game> for TaggedGameRef<'a> {
    fn from(game: &'a Game) -> Self {
        TaggedGameRef::Game {
            name: &game.name,
            distributors: &game.distributors,
            played: game.played,
        }
    }
}

impl From<TaggedGame> for Game {
    fn from(tagged: TaggedGame) -> Self {
        match tagged {
            TaggedGame::Game {
                name,
                distributors,
                played,
            } => Game {
                name,
                played,
                distributors,
            },
        }
    }
}

/// One decoded snapshot value
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Game(Game),
    /// Anything not tagged as a game, kept verbatim
    Unrecognized(Value),
}

impl Record {
    /// Classify a JSON value by its discriminator.
    ///
    /// A value tagged `Game` must carry every game field; a missing or
    /// mistyped field is a parse error rather than a passthrough.
    pub fn from_value(value: Value) -> Result<Self> {
        let is_game = value
            .get(TYPE_FIELD)
            .and_then(Value::as_str)
            .is_some_and(|tag| tag == GAME_TAG);

        if is_game {
            let tagged: TaggedGame = serde_json::from_value(value)?;
            Ok(Record::Game(tagged.into()))
        } else {
            Ok(Record::Unrecognized(value))
        }
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Record::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Encode a single game as a tagged JSON value
pub fn game_to_value(game: &Game) -> Result<Value> {
    Ok(serde_json::to_value(TaggedGameRef::from(game))?)
}

/// Build the snapshot document for a library. Keys come out sorted.
pub fn library_to_value(library: &Library) -> Result<Value> {
    let mut document = Map::new();
    for (title, value) in library.unrecognized() {
        document.insert(title.clone(), value.clone());
    }
    for game in library.sorted_games() {
        document.insert(game.name.clone(), game_to_value(game)?);
    }
    Ok(Value::Object(document))
}

/// Write a library snapshot as pretty-printed JSON
pub fn write_library<W: Write>(writer: W, library: &Library) -> Result<()> {
    serde_json::to_writer_pretty(writer, &library_to_value(library)?)?;
    Ok(())
}

/// Read a library snapshot. The top level must be a JSON object.
pub fn read_library<R: Read>(reader: R) -> Result<Library> {
    let document: BTreeMap<String, Record> = serde_json::from_reader(reader)?;
    Ok(Library::from_records(document))
}

/// Encode a library snapshot to a string
pub fn encode_library(library: &Library) -> Result<String> {
    Ok(serde_json::to_string_pretty(&library_to_value(library)?)?)
}

/// Decode a library snapshot from a string
pub fn decode_library(text: &str) -> Result<Library> {
    let document: BTreeMap<String, Record> = serde_json::from_str(text)?;
    Ok(Library::from_records(document))
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
