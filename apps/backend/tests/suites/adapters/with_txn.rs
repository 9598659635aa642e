use bingo::db::txn::with_txn;
use bingo::domain::SampleRange;
use bingo::error::AppError;
use bingo::errors::ErrorCode;
use bingo::repos::{calls, games};
use bingo::services::GameService;
use bingo::state::app_state::AppState;

use crate::support::build_test_state;
use crate::support::test_state::db;

#[tokio::test]
async fn commits_on_ok() {
    let state = build_test_state().await;
    let service = GameService::new(SampleRange::Legacy);

    let game_id = with_txn(&state, |txn| {
        Box::pin(async move {
            let (game, _) = service.create_game_with_seed_call(txn, "Committed").await?;
            Ok::<_, AppError>(game.id)
        })
    })
    .await
    .unwrap();

    assert_eq!(games::count_games(db(&state)).await.unwrap(), 1);
    assert_eq!(calls::count_by_game(db(&state), game_id).await.unwrap(), 1);
}

#[tokio::test]
async fn rolls_back_both_inserts_on_err() {
    let state = build_test_state().await;
    let service = GameService::new(SampleRange::Legacy);

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        Box::pin(async move {
            service.create_game_with_seed_call(txn, "Doomed").await?;
            Err::<(), _>(AppError::internal(ErrorCode::Internal, "forced failure"))
        })
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);
    assert_eq!(games::count_games(db(&state)).await.unwrap(), 0);
}

#[tokio::test]
async fn without_db_is_unavailable() {
    let state = AppState::without_db(SampleRange::Legacy);

    let result = with_txn(&state, |_txn| Box::pin(async { Ok::<_, AppError>(()) })).await;
    assert!(matches!(result, Err(AppError::DbUnavailable)));
}
