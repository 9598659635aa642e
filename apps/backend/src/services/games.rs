//! Game domain service.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::adapters::games_sea::GameCreate;
use crate::domain::{CallDraw, SampleRange};
use crate::errors::domain::DomainError;
use crate::repos::calls::{self, Call};
use crate::repos::games::{self, Game};

/// Game domain service.
pub struct GameService {
    range: SampleRange,
}

impl GameService {
    pub fn new(range: SampleRange) -> Self {
        Self { range }
    }

    /// Persist a game and its seed call.
    ///
    /// Callers pass a transaction so the two inserts land together.
    pub async fn create_game_with_seed_call<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        title: impl Into<String>,
    ) -> Result<(Game, Call), DomainError> {
        let game = games::create_game(conn, GameCreate::new().with_title(title)).await?;
        info!(game_id = game.id, "game created");

        let draw = CallDraw::draw(&mut rand::rng(), self.range);
        let call = calls::create_call(conn, game.id, &draw).await?;
        info!(
            game_id = game.id,
            call_id = call.id,
            column_number = %call.column_number,
            "seed call drawn"
        );

        Ok((game, call))
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new(SampleRange::default())
    }
}
