use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod calls;
pub mod cards;
pub mod games;
pub mod health;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .configure(health::configure_routes)
        .configure(games::configure_routes)
        .configure(calls::configure_routes)
        .configure(cards::configure_routes);
}

/// Malformed form bodies become problem responses like every other error.
fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid form body: {err}")).into()
    })
}
