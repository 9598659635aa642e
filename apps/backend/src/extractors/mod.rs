pub mod card_id;
pub mod game_id;

use actix_web::HttpRequest;

pub use card_id::CardId;
pub use game_id::GameId;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Parse a positive i64 from the named path segment.
fn parse_positive_id(
    req: &HttpRequest,
    param: &str,
    entity: &str,
    code: ErrorCode,
) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(param)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {param} parameter")))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {entity} id: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            code,
            format!("{entity} id must be positive, got: {id}"),
        ));
    }

    Ok(id)
}
