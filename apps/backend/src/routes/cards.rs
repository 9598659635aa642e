use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::CardId;
use crate::services::load_card_with_game;
use crate::state::app_state::AppState;
use crate::views;

async fn show_card(
    card_id: CardId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let (card, game) = load_card_with_game(db, card_id.0).await?;

    Ok(HttpResponse::Ok()
        .content_type(views::HTML_CONTENT_TYPE)
        .body(views::cards::card(&card, &game)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/card/{card_id}").route(web::get().to(show_card)));
}
