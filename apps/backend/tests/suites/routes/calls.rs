use actix_web::http::StatusCode;
use actix_web::test;
use bingo::domain::SampleRange;
use bingo::repos::calls;

use crate::common::{assert_problem, read_html};
use crate::support::test_state::db;
use crate::support::{build_test_state, build_test_state_with_range, create_test_app, factory};

#[actix_web::test]
async fn drawing_twice_yields_two_calls() {
    let state = build_test_state().await;
    let game = factory::create_game(db(&state), "Bingo night").await;
    let app = create_test_app(state.clone()).build().await;

    let uri = format!("/games/{}/call", game.id);
    let first = read_html(test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await).await;
    assert_eq!(first.matches("<li>").count(), 1);

    let second = read_html(test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await).await;
    assert_eq!(second.matches("<li>").count(), 2);

    let history = calls::list_by_game(db(&state), game.id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_ne!(history[0].id, history[1].id);
    // newest first
    assert!(history[0].id > history[1].id);
    assert!(second.contains(&format!("<p class=\"call\">{}</p>", history[0].column_number)));
}

#[actix_web::test]
async fn legacy_draws_stay_inside_legacy_domains() {
    let state = build_test_state_with_range(SampleRange::Legacy).await;
    let game = factory::create_game(db(&state), "Legacy").await;
    let app = create_test_app(state.clone()).build().await;

    let uri = format!("/games/{}/call", game.id);
    for _ in 0..20 {
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    for call in calls::list_by_game(db(&state), game.id).await.unwrap() {
        assert!(["B", "I", "N", "G", "O"].contains(&call.column.as_str()), "column {}", call.column);
        let number: u8 = call.number.parse().unwrap();
        assert!((1..=29).contains(&number));
        assert_eq!(call.column_number, format!("{}{}", call.column, call.number));
    }
}

#[actix_web::test]
async fn drawing_for_unknown_game_is_not_found() {
    let state = build_test_state().await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/games/41/call").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "GAME_NOT_FOUND", Some("41")).await;
}

#[actix_web::test]
async fn default_draws_reach_column_o() {
    let state = build_test_state().await;
    let game = factory::create_game(db(&state), "Every column").await;
    let app = create_test_app(state.clone()).build().await;

    let uri = format!("/games/{}/call", game.id);
    for _ in 0..300 {
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let drawn = calls::list_by_game(db(&state), game.id).await.unwrap();
    assert_eq!(drawn.len(), 300);
    let o_count = drawn.iter().filter(|call| call.column == "O").count();
    assert!(o_count > 0, "no O among {} calls", drawn.len());
}
