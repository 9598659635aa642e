use std::fmt::Write;

use super::{escape, layout};
use crate::repos::calls::Call;
use crate::repos::games::Game;

/// The call just drawn, followed by the game's history (newest first).
pub fn call(game: &Game, current: &Call, history: &[Call]) -> String {
    let title = game.display_title();
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(&title));
    let _ = writeln!(
        body,
        "<p class=\"call\">{}</p>",
        escape(&current.column_number)
    );
    let _ = writeln!(
        body,
        "<p><a href=\"/games/{}/call\">Next call</a></p>",
        game.id
    );
    body.push_str("<h2>Called so far</h2>\n<ol class=\"history\">\n");
    for past in history {
        let _ = writeln!(body, "<li>{}</li>", escape(&past.column_number));
    }
    body.push_str("</ol>");
    layout(&title, &body)
}
