use actix_web::http::StatusCode;
use actix_web::test;
use bingo::domain::SampleRange;
use bingo::state::app_state::AppState;
use serde_json::Value;

use crate::support::test_state::db;
use crate::support::{build_test_state, build_test_state_with_range, create_test_app, factory};

#[actix_web::test]
async fn health_reports_db_and_migrations() {
    let state = build_test_state().await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20251019_000001_init");
    assert_eq!(body["sample_range"], "legacy");
    assert_eq!(body["games"], 0);
    assert!(body.get("db_error").is_none());
    assert!(body["time"].as_str().is_some());
}

#[actix_web::test]
async fn health_without_db_is_degraded_but_up() {
    let app = create_test_app(AppState::without_db(SampleRange::Legacy))
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["db"], "error");
    assert_eq!(body["migrations"], "unknown");
    assert!(body.get("games").is_none());
}

#[actix_web::test]
async fn health_counts_games() {
    let state = build_test_state_with_range(SampleRange::Full).await;
    factory::create_game(db(&state), "One").await;
    factory::create_game(db(&state), "Two").await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["games"], 2);
    assert_eq!(body["sample_range"], "full");
}
