//! SeaORM adapter for card repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::cards;
use crate::infra::db_errors::CARD_NOT_FOUND_PREFIX;

pub mod dto;

pub use dto::CardCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Option<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find_by_id(card_id).one(conn).await
}

pub async fn require_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<cards::Model, sea_orm::DbErr> {
    find_by_id(conn, card_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("{CARD_NOT_FOUND_PREFIX}{card_id}")))
}

pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find()
        .filter(cards::Column::GameId.eq(game_id))
        .order_by_asc(cards::Column::Id)
        .all(conn)
        .await
}

pub async fn create_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CardCreate,
) -> Result<cards::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let card_active = cards::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        numbers: Set(serde_json::Value::from(dto.numbers)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    card_active.insert(conn).await
}
