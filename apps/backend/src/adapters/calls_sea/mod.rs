//! SeaORM adapter for call repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::calls;

pub mod dto;

pub use dto::CallCreate;

/// Calls for a game, newest first.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<calls::Model>, sea_orm::DbErr> {
    calls::Entity::find()
        .filter(calls::Column::GameId.eq(game_id))
        .order_by_desc(calls::Column::Id)
        .all(conn)
        .await
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    calls::Entity::find()
        .filter(calls::Column::GameId.eq(game_id))
        .count(conn)
        .await
}

pub async fn create_call<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CallCreate,
) -> Result<calls::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let call_active = calls::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        column_letter: Set(dto.column_letter),
        number: Set(dto.number),
        column_number: Set(dto.column_number),
        created_at: Set(now),
        updated_at: Set(now),
    };

    call_active.insert(conn).await
}
