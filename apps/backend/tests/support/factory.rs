//! Row factories for tests that need data without going through HTTP.

use bingo::adapters::calls_sea::{self, CallCreate};
use bingo::adapters::cards_sea::{self, CardCreate};
use bingo::adapters::games_sea::{self, GameCreate};
use bingo::entities::{calls, cards, games};
use sea_orm::ConnectionTrait;

pub async fn create_game<C: ConnectionTrait + Send + Sync>(conn: &C, title: &str) -> games::Model {
    games_sea::create_game(conn, GameCreate::new().with_title(title))
        .await
        .expect("create game")
}

/// A card whose numbers read 1..=25 in row-major order.
pub async fn create_sequential_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> cards::Model {
    let numbers = (1..=25).map(|n| n.to_string()).collect();
    cards_sea::create_card(conn, CardCreate::new(game_id, numbers))
        .await
        .expect("create card")
}

pub async fn create_call<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    column: &str,
    number: &str,
) -> calls::Model {
    calls_sea::create_call(
        conn,
        CallCreate {
            game_id,
            column_letter: column.to_string(),
            number: number.to_string(),
            column_number: format!("{column}{number}"),
        },
    )
    .await
    .expect("create call")
}
