use bingo::adapters::calls_sea;
use bingo::domain::CallDraw;
use bingo::repos::calls;

use crate::support::test_state::db;
use crate::support::{build_test_state, factory};

#[tokio::test]
async fn create_call_stores_concatenated_column_number() {
    let state = build_test_state().await;
    let conn = db(&state);
    let game = factory::create_game(conn, "Calls").await;

    let draw = CallDraw::from_tokens("G", "17").unwrap();
    let call = calls::create_call(conn, game.id, &draw).await.unwrap();
    assert_eq!(call.column, "G");
    assert_eq!(call.number, "17");
    assert_eq!(call.column_number, "G17");
}

#[tokio::test]
async fn history_is_newest_first_and_scoped_to_game() {
    let state = build_test_state().await;
    let conn = db(&state);
    let game = factory::create_game(conn, "History").await;
    let other = factory::create_game(conn, "Elsewhere").await;

    factory::create_call(conn, game.id, "B", "1").await;
    factory::create_call(conn, other.id, "O", "30").await;
    factory::create_call(conn, game.id, "I", "2").await;
    factory::create_call(conn, game.id, "N", "3").await;

    let history: Vec<String> = calls::list_by_game(conn, game.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.column_number)
        .collect();
    assert_eq!(history, ["N3", "I2", "B1"]);
    assert_eq!(calls_sea::count_by_game(conn, game.id).await.unwrap(), 3);
    assert_eq!(calls_sea::count_by_game(conn, other.id).await.unwrap(), 1);
}
