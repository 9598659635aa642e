//! Card issuing service.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::{CardNumbers, SampleRange};
use crate::errors::domain::DomainError;
use crate::repos::cards::{self, Card};
use crate::repos::games::{self, Game};

pub struct CardService {
    range: SampleRange,
}

impl CardService {
    pub fn new(range: SampleRange) -> Self {
        Self { range }
    }

    /// Deal a new card into an existing game.
    pub async fn issue_card<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Card, DomainError> {
        let game = games::require_game(conn, game_id).await?;

        let numbers = CardNumbers::generate(&mut rand::rng(), self.range);
        let card = cards::create_card(conn, game.id, numbers).await?;
        info!(game_id = game.id, card_id = card.id, "card issued");

        Ok(card)
    }
}

/// A card together with the game it was dealt for.
pub async fn load_card_with_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<(Card, Game), DomainError> {
    let card = cards::require_card(conn, card_id).await?;
    let game = games::require_game(conn, card.game_id).await?;
    Ok((card, game))
}
