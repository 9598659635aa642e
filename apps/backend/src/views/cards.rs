use std::fmt::Write;

use super::{escape, layout};
use crate::domain::BingoColumn;
use crate::repos::cards::Card;
use crate::repos::games::Game;

/// 5x5 card table under the B-I-N-G-O header, filled row-major.
pub fn card(card: &Card, game: &Game) -> String {
    let title = game.display_title();
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(&title));
    let _ = writeln!(body, "<p>Card #{}</p>", card.id);
    body.push_str("<table class=\"card\">\n<thead>\n<tr>");
    for column in BingoColumn::ALL {
        let _ = write!(body, "<th>{column}</th>");
    }
    body.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in card.numbers.rows() {
        body.push_str("<tr>");
        for token in row {
            let _ = write!(body, "<td>{}</td>", escape(token));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</tbody>\n</table>");
    layout(&title, &body)
}
