//! Call repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::calls_sea as calls_adapter;
use crate::domain::CallDraw;
use crate::entities::calls;
use crate::errors::domain::DomainError;

/// Call domain model. Stored tokens are kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub id: i64,
    pub game_id: i64,
    pub column: String,
    pub number: String,
    pub column_number: String,
    pub created_at: time::OffsetDateTime,
}

/// Calls for a game, newest first.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Call>, DomainError> {
    let calls = calls_adapter::list_by_game(conn, game_id).await?;
    Ok(calls.into_iter().map(Call::from).collect())
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, DomainError> {
    Ok(calls_adapter::count_by_game(conn, game_id).await?)
}

pub async fn create_call<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    draw: &CallDraw,
) -> Result<Call, DomainError> {
    let dto = calls_adapter::CallCreate {
        game_id,
        column_letter: draw.column().as_str().to_string(),
        number: draw.number_token(),
        column_number: draw.column_number(),
    };
    let call = calls_adapter::create_call(conn, dto).await?;
    Ok(Call::from(call))
}

impl From<calls::Model> for Call {
    fn from(model: calls::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            column: model.column_letter,
            number: model.number,
            column_number: model.column_number,
            created_at: model.created_at,
        }
    }
}
