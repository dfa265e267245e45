use picker_common::{Game, Library, LibraryError};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn five_title_library() -> Library {
    [
        "Risk of Rain 2",
        "Mortal Kombat 11",
        "Imperator: Rome",
        "MONSTER HUNTER: WORLD",
        "Forager",
    ]
    .into_iter()
    .map(Game::new)
    .collect()
}

#[test]
fn test_save_and_reload_five_titles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ff.json");

    let library = five_title_library();
    library.save(&path).unwrap();
    assert!(path.exists());

    let reloaded = Library::from_file(&path).unwrap();
    assert_eq!(reloaded.total_games(false), 5);
    assert_eq!(reloaded.titles(), library.titles());
    assert_eq!(reloaded, library);
}

#[test]
fn test_round_trip_after_merge() {
    let mut steam = Library::new();
    steam.add_game(Game::new("A").with_distributor("steam"));
    steam.add_game(Game::new("B").with_distributor("steam").with_played(true));
    let mut gog = Library::new();
    gog.add_game(Game::new("B").with_distributor("gog"));
    gog.add_game(Game::new("C").with_distributor("gog"));

    let mut master = Library::new();
    master.merge_from_many([&steam, &gog]);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("master.json");
    master.save(&path).unwrap();

    let reloaded = Library::from_file(&path).unwrap();
    assert_eq!(reloaded, master);
    assert_eq!(
        reloaded.get_game("B").unwrap().distributor_list(),
        vec!["gog", "steam"]
    );
    assert!(reloaded.get_game("B").unwrap().played);
}

#[test]
fn test_saved_file_is_tagged_object() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lib.json");

    let mut library = Library::new();
    library.add_game(Game::new("Forager").with_distributors(["steam", "gog"]));
    library.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "Forager": {
                "__type__": "Game",
                "name": "Forager",
                "distributors": ["gog", "steam"],
                "played": false
            }
        })
    );
}

#[test]
fn test_load_replaces_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lib.json");
    five_title_library().save(&path).unwrap();

    let mut library = Library::new();
    library.add_game(Game::new("Not in the file"));
    library.load(&path).unwrap();

    assert_eq!(library.len(), 5);
    assert!(library.get_game("Not in the file").is_none());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("lib.json");

    five_title_library().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_nonexistent_file() {
    let result = Library::from_file("/this/file/does/not/exist.json");
    assert!(matches!(result, Err(LibraryError::Io(_))));
}

#[test]
fn test_load_corrupt_file_leaves_library_unchanged() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{{\"A\": {{\"__type__\": \"Game\", \"name\": \"A\"").unwrap();

    let mut library = five_title_library();
    let result = library.load(temp_file.path());

    assert!(matches!(result, Err(LibraryError::Parse(_))));
    assert_eq!(library.len(), 5);
}

#[test]
fn test_load_record_missing_field() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        r#"{{"A": {{"__type__": "Game", "name": "A", "played": false}}}}"#
    )
    .unwrap();

    let result = Library::from_file(temp_file.path());
    assert!(matches!(result, Err(LibraryError::Parse(_))));
}
