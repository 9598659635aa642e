use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use super::parse_positive_id;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game ID extracted from the `{game_id}` path segment.
///
/// Only the shape is checked here; existence is checked by the service that
/// loads the game.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_positive_id(req, "game_id", "game", ErrorCode::InvalidGameId).map(GameId))
    }
}
