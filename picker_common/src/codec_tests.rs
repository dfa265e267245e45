//! Tests for the snapshot codec

use super::*;
use crate::error::LibraryError;
use serde_json::json;

#[test]
fn game_encodes_as_tagged_record() {
    let game = Game::new("foo").with_distributor("bar").with_played(true);
    let value = game_to_value(&game).unwrap();

    assert_eq!(
        value,
        json!({
            "__type__": "Game",
            "name": "foo",
            "distributors": ["bar"],
            "played": true
        })
    );
}

#[test]
fn game_round_trips_through_record() {
    let game = Game::new("foo").with_distributor("bar").with_played(true);
    let value = game_to_value(&game).unwrap();

    match Record::from_value(value).unwrap() {
        Record::Game(decoded) => {
            assert_eq!(decoded, game);
            assert_eq!(decoded.distributor_list(), vec!["bar"]);
        }
        other => panic!("Expected Record::Game, got: {other:?}"),
    }
}

#[test]
fn untagged_value_passes_through() {
    let value = json!({"name": "Forager", "played": false});
    let record = Record::from_value(value.clone()).unwrap();
    assert_eq!(record, Record::Unrecognized(value));
}

#[test]
fn other_type_tag_passes_through() {
    let value = json!({"__type__": "Bundle", "name": "Humble Indie Bundle"});
    let record = Record::from_value(value.clone()).unwrap();
    assert_eq!(record, Record::Unrecognized(value));
}

#[test]
fn non_object_value_passes_through() {
    let record = Record::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(record, Record::Unrecognized(json!([1, 2, 3])));
}

#[test]
fn tagged_record_missing_field_is_parse_error() {
    let value = json!({"__type__": "Game", "name": "Forager", "played": false});
    assert!(matches!(
        Record::from_value(value),
        Err(LibraryError::Parse(_))
    ));
}

#[test]
fn decoding_sorts_and_dedups_distributors() {
    let value = json!({
        "__type__": "Game",
        "name": "Forager",
        "distributors": ["steam", "gog", "steam"],
        "played": false
    });
    let Record::Game(game) = Record::from_value(value).unwrap() else {
        panic!("Expected a game record");
    };
    assert_eq!(game.distributor_list(), vec!["gog", "steam"]);
}

#[test]
fn library_encodes_keyed_by_title() {
    let mut library = Library::new();
    library.add_game(Game::new("B").with_distributors(["steam", "gog"]));
    library.add_game(Game::new("A").with_played(true));

    let value = library_to_value(&library).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["A"]["played"], json!(true));
    assert_eq!(object["B"]["distributors"], json!(["gog", "steam"]));
    assert_eq!(object["B"]["__type__"], json!("Game"));
}

#[test]
fn library_round_trips_through_string() {
    let mut library = Library::new();
    library.add_game(Game::new("Risk of Rain 2").with_distributor("steam"));
    library.add_game(Game::new("Forager").with_played(true));

    let text = encode_library(&library).unwrap();
    let decoded = decode_library(&text).unwrap();
    assert_eq!(decoded, library);
    assert_eq!(decoded.titles(), library.titles());
}

#[test]
fn decoding_keeps_untagged_entries_aside() {
    let text = r#"{
        "Forager": {"__type__": "Game", "name": "Forager", "distributors": ["gog"], "played": false},
        "notes": {"owner": "me"}
    }"#;

    let library = decode_library(text).unwrap();
    assert_eq!(library.len(), 1);
    assert_eq!(library.unrecognized().len(), 1);
    assert_eq!(library.unrecognized()["notes"], json!({"owner": "me"}));

    let encoded: serde_json::Value = serde_json::from_str(&encode_library(&library).unwrap()).unwrap();
    assert_eq!(encoded["notes"], json!({"owner": "me"}));
}

#[test]
fn mismatched_key_is_keyed_by_name() {
    let text = r#"{
        "old title": {"__type__": "Game", "name": "New Title", "distributors": [], "played": false}
    }"#;
    let library = decode_library(text).unwrap();
    assert!(library.get_game("New Title").is_some());
    assert!(library.get_game("old title").is_none());
}

#[test]
fn invalid_json_is_parse_error() {
    assert!(matches!(
        decode_library("{not json"),
        Err(LibraryError::Parse(_))
    ));
}

#[test]
fn top_level_must_be_an_object() {
    assert!(matches!(
        decode_library("[]"),
        Err(LibraryError::Parse(_))
    ));
}

#[test]
fn empty_object_is_empty_library() {
    let library = decode_library("{}").unwrap();
    assert!(library.is_empty());
}

#[test]
fn added_game_replaces_untagged_entry_with_same_title() {
    let mut library = decode_library(r#"{"notes": {"owner": "me"}}"#).unwrap();
    library.add_game(Game::new("notes").with_distributor("gog"));

    assert!(library.unrecognized().is_empty());
    let encoded: serde_json::Value = serde_json::from_str(&encode_library(&library).unwrap()).unwrap();
    assert_eq!(encoded["notes"]["__type__"], json!("Game"));
    assert_eq!(encoded["notes"]["distributors"], json!(["gog"]));
}

#[test]
fn rekeyed_game_wins_over_untagged_entry() {
    // "a" sorts before "notes", "zzz" after it
    for key in ["a", "zzz"] {
        let text = format!(
            r#"{{
                "{key}": {{"__type__": "Game", "name": "notes", "distributors": [], "played": false}},
                "notes": {{"owner": "me"}}
            }}"#
        );
        let library = decode_library(&text).unwrap();

        assert_eq!(library.titles(), vec!["notes"]);
        assert!(library.unrecognized().is_empty(), "key {key}");
        let encoded = library_to_value(&library).unwrap();
        assert_eq!(encoded["notes"]["__type__"], json!("Game"));
    }
}
