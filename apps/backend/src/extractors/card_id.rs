use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use super::parse_positive_id;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Card ID extracted from the `{card_id}` path segment.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CardId(pub i64);

impl FromRequest for CardId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_positive_id(req, "card_id", "card", ErrorCode::InvalidCardId).map(CardId))
    }
}
