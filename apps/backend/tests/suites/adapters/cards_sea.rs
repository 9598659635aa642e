use bingo::adapters::cards_sea::{self, CardCreate};
use bingo::domain::{CardNumbers, SampleRange};
use bingo::entities::games;
use bingo::errors::domain::{DomainError, NotFoundKind};
use bingo::repos::cards;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sea_orm::EntityTrait;

use crate::support::test_state::db;
use crate::support::{build_test_state, factory};

#[tokio::test]
async fn numbers_round_trip_through_json_column() {
    let state = build_test_state().await;
    let conn = db(&state);
    let game = factory::create_game(conn, "Cards").await;

    let numbers = CardNumbers::generate(&mut StdRng::seed_from_u64(3), SampleRange::Legacy);
    let card = cards::create_card(conn, game.id, numbers.clone()).await.unwrap();

    let loaded = cards::require_card(conn, card.id).await.unwrap();
    assert_eq!(loaded.game_id, game.id);
    assert_eq!(loaded.numbers, numbers);
}

#[tokio::test]
async fn list_by_game_only_returns_that_game() {
    let state = build_test_state().await;
    let conn = db(&state);
    let mine = factory::create_game(conn, "Mine").await;
    let other = factory::create_game(conn, "Other").await;

    factory::create_sequential_card(conn, mine.id).await;
    factory::create_sequential_card(conn, mine.id).await;
    factory::create_sequential_card(conn, other.id).await;

    assert_eq!(cards::list_by_game(conn, mine.id).await.unwrap().len(), 2);
    assert_eq!(cards::list_by_game(conn, other.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn missing_card_is_typed_not_found() {
    let state = build_test_state().await;

    let err = cards::require_card(db(&state), 77).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Card, _)));
    assert_eq!(cards::find_by_id(db(&state), 77).await.unwrap(), None);
}

#[tokio::test]
async fn card_for_missing_game_violates_foreign_key() {
    let state = build_test_state().await;
    let numbers = (1..=25).map(|n| n.to_string()).collect();

    let err = cards_sea::create_card(db(&state), CardCreate::new(999, numbers))
        .await
        .unwrap_err();
    assert!(matches!(DomainError::from(err), DomainError::Validation(_)));
}

#[tokio::test]
async fn deleting_a_game_cascades_to_cards() {
    let state = build_test_state().await;
    let conn = db(&state);
    let game = factory::create_game(conn, "Doomed").await;
    let card = factory::create_sequential_card(conn, game.id).await;

    games::Entity::delete_by_id(game.id).exec(conn).await.unwrap();

    assert_eq!(cards_sea::find_by_id(conn, card.id).await.unwrap(), None);
}

#[tokio::test]
async fn load_card_with_game_pairs_card_and_owner() {
    let state = build_test_state().await;
    let conn = db(&state);
    let game = factory::create_game(conn, "Owner").await;
    let row = factory::create_sequential_card(conn, game.id).await;

    let (card, owner) = bingo::services::load_card_with_game(conn, row.id).await.unwrap();
    assert_eq!(card.id, row.id);
    assert_eq!(owner.id, game.id);
    assert_eq!(owner.title, "Owner");

    let err = bingo::services::load_card_with_game(conn, row.id + 100)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Card, _)));
}
