use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::GameId;
use crate::services::CallService;
use crate::state::app_state::AppState;
use crate::views;

/// Draw a new call. Not idempotent: every hit appends to the history.
async fn draw_call(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let outcome = CallService::new(app_state.sample_range)
        .draw_call(db, game_id.0)
        .await?;

    Ok(HttpResponse::Ok()
        .content_type(views::HTML_CONTENT_TYPE)
        .body(views::calls::call(
            &outcome.game,
            &outcome.call,
            &outcome.history,
        )))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/games/{game_id}/call").route(web::get().to(draw_call)));
}
