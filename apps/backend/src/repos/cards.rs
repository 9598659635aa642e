//! Card repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::cards_sea as cards_adapter;
use crate::domain::CardNumbers;
use crate::entities::cards;
use crate::errors::domain::DomainError;

/// Card domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: i64,
    pub game_id: i64,
    pub numbers: CardNumbers,
    pub created_at: time::OffsetDateTime,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Option<Card>, DomainError> {
    cards_adapter::find_by_id(conn, card_id)
        .await?
        .map(Card::try_from)
        .transpose()
}

/// Find card by ID or return `NotFound(Card)`.
pub async fn require_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Card, DomainError> {
    let card = cards_adapter::require_card(conn, card_id).await?;
    Card::try_from(card)
}

pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Card>, DomainError> {
    cards_adapter::list_by_game(conn, game_id)
        .await?
        .into_iter()
        .map(Card::try_from)
        .collect()
}

pub async fn create_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    numbers: CardNumbers,
) -> Result<Card, DomainError> {
    let dto = cards_adapter::CardCreate::new(game_id, numbers.into_inner());
    let card = cards_adapter::create_card(conn, dto).await?;
    Card::try_from(card)
}

impl TryFrom<cards::Model> for Card {
    type Error = DomainError;

    fn try_from(model: cards::Model) -> Result<Self, Self::Error> {
        let tokens: Vec<String> = serde_json::from_value(model.numbers).map_err(|e| {
            DomainError::data_corruption(format!("card {} numbers are not a list: {e}", model.id))
        })?;
        let numbers = CardNumbers::from_tokens(tokens).map_err(|e| {
            DomainError::data_corruption(format!("card {} numbers are invalid: {e}", model.id))
        })?;
        Ok(Self {
            id: model.id,
            game_id: model.game_id,
            numbers,
            created_at: model.created_at,
        })
    }
}
