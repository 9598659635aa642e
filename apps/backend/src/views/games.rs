use std::fmt::Write;

use super::{escape, layout};
use crate::repos::games::Game;

/// Game listing with a card link per game.
pub fn index(games: &[Game]) -> String {
    let mut body = String::from("<h1>Bingo</h1>\n");
    if games.is_empty() {
        body.push_str("<p>No games yet.</p>\n");
    } else {
        body.push_str("<ul class=\"games\">\n");
        for game in games {
            let _ = writeln!(
                body,
                "<li><a href=\"/games/{id}\">{title}</a></li>",
                id = game.id,
                title = escape(&game.display_title()),
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/new/game\">New game</a></p>");
    layout("Games", &body)
}

/// Form posting `game[title]` to the create endpoint.
pub fn new_game_form() -> String {
    let body = "<h1>New game</h1>\n\
                <form method=\"post\" action=\"/create/a/new/game\">\n\
                <label for=\"game_title\">Title</label>\n\
                <input type=\"text\" id=\"game_title\" name=\"game[title]\">\n\
                <button type=\"submit\">Create</button>\n\
                </form>\n\
                <p><a href=\"/\">Back to games</a></p>";
    layout("New game", body)
}
