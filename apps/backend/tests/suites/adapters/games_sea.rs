use bingo::adapters::games_sea::{self, GameCreate};
use bingo::errors::domain::{DomainError, NotFoundKind};
use bingo::repos::games;

use crate::support::build_test_state;
use crate::support::test_state::db;

#[tokio::test]
async fn create_then_find() {
    let state = build_test_state().await;
    let conn = db(&state);

    let created = games_sea::create_game(conn, GameCreate::new().with_title("Alpha"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "Alpha");

    let found = games_sea::find_by_id(conn, created.id)
        .await
        .unwrap()
        .expect("game exists");
    assert_eq!(found.id, created.id);
    assert_eq!(found.title, "Alpha");
}

#[tokio::test]
async fn titles_are_not_unique() {
    let state = build_test_state().await;
    let conn = db(&state);

    let a = games_sea::create_game(conn, GameCreate::new().with_title("Same")).await.unwrap();
    let b = games_sea::create_game(conn, GameCreate::new().with_title("Same")).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(games_sea::count_all(conn).await.unwrap(), 2);
}

#[tokio::test]
async fn list_all_is_ordered_by_id() {
    let state = build_test_state().await;
    let conn = db(&state);

    for title in ["one", "two", "three"] {
        games_sea::create_game(conn, GameCreate::new().with_title(title)).await.unwrap();
    }

    let titles: Vec<String> = games_sea::list_all(conn)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, ["one", "two", "three"]);
}

#[tokio::test]
async fn require_game_maps_to_typed_not_found() {
    let state = build_test_state().await;

    let err = games::require_game(db(&state), 404).await.unwrap_err();
    assert_eq!(err, DomainError::game_not_found(404));
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
}
