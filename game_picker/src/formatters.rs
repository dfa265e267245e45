use picker_common::{Game, Library};

/// Shown when a pick is requested but nothing qualifies
pub const NO_GAMES_MESSAGE: &str = "Sad. You have no games to choose from!";

/// One-line summary of the master library
pub fn format_stats(library: &Library) -> String {
    let platforms: Vec<&str> = library.distinct_distributors().into_iter().collect();
    format!(
        "Master Library: {} games, {} unplayed, across these platforms: {}",
        library.total_games(false),
        library.total_games(true),
        platforms.join(" ")
    )
}

pub fn format_pick(game: &Game) -> String {
    format!(
        "You should play: {} on {}",
        game.name,
        game.distributor_list().join(", ")
    )
}

/// Fixed-width `title | sources | played` table, sorted by title
pub fn format_library_table(library: &Library) -> String {
    let games = library.sorted_games();
    let rows: Vec<(&str, String, &str)> = games
        .iter()
        .map(|game| {
            (
                game.name.as_str(),
                game.distributor_list().join(", "),
                if game.played { "X" } else { " " },
            )
        })
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _, _)| name.chars().count())
        .max()
        .unwrap_or(1);
    let source_width = rows
        .iter()
        .map(|(_, sources, _)| sources.chars().count())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for (name, sources, played) in rows {
        output.push_str(&format!(
            "{name:<name_width$} | {sources:<source_width$} | {played}\n"
        ));
    }
    output
}
