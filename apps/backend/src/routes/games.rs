use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::GameId;
use crate::repos::games;
use crate::services::{CardService, GameService};
use crate::state::app_state::AppState;
use crate::views;

/// Body of the new-game form. A missing field means an untitled game.
#[derive(Debug, Default, Deserialize)]
pub struct NewGameForm {
    #[serde(rename = "game[title]", default)]
    pub title: Option<String>,
}

async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let games = games::list_games(db).await?;

    Ok(HttpResponse::Ok()
        .content_type(views::HTML_CONTENT_TYPE)
        .body(views::games::index(&games)))
}

/// Deal a card into the game and send the player to it.
async fn issue_card(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let card = CardService::new(app_state.sample_range)
        .issue_card(db, game_id.0)
        .await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/card/{}", card.id)))
        .finish())
}

async fn new_game_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(views::HTML_CONTENT_TYPE)
        .body(views::games::new_game_form())
}

async fn create_game(
    form: web::Form<NewGameForm>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let title = form.into_inner().title.unwrap_or_default();
    let service = GameService::new(app_state.sample_range);

    with_txn(&app_state, |txn| {
        Box::pin(async move {
            service.create_game_with_seed_call(txn, title).await?;
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(list_games)))
        .service(web::resource("/games/{game_id}").route(web::get().to(issue_card)))
        .service(web::resource("/new/game").route(web::get().to(new_game_form)))
        .service(web::resource("/create/a/new/game").route(web::post().to(create_game)));
}
