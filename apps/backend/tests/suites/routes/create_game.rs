use actix_web::http::StatusCode;
use actix_web::test;
use bingo::repos::{calls, games};

use crate::common::{assert_problem, read_html, redirect_location};
use crate::support::test_state::db;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn creating_a_game_stores_one_game_and_one_seed_call() {
    let state = build_test_state().await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/create/a/new/game")
        .set_form([("game[title]", "Office party")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(redirect_location(&resp), "/");

    let all = games::list_games(db(&state)).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Office party");

    let seed = calls::list_by_game(db(&state), all[0].id).await.unwrap();
    assert_eq!(seed.len(), 1);
    assert_eq!(seed[0].column_number, format!("{}{}", seed[0].column, seed[0].number));
}

#[actix_web::test]
async fn created_game_shows_up_on_the_index() {
    let state = build_test_state().await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/create/a/new/game")
        .set_form([("game[title]", "Fish & Chips")])
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("Fish &amp; Chips"));
}

#[actix_web::test]
async fn missing_title_creates_untitled_game() {
    let state = build_test_state().await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/create/a/new/game")
        .set_form([("other", "field")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let all = games::list_games(db(&state)).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "");
    assert_eq!(all[0].display_title(), format!("Game #{}", all[0].id));
}

#[actix_web::test]
async fn non_form_body_is_rejected() {
    let state = build_test_state().await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/create/a/new/game")
        .set_json(serde_json::json!({"game": {"title": "json"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", Some("form")).await;

    assert_eq!(games::count_games(db(&state)).await.unwrap(), 0);
}
