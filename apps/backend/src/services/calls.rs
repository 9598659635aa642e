//! Call drawing service.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::{CallDraw, SampleRange};
use crate::errors::domain::DomainError;
use crate::repos::calls::{self, Call};
use crate::repos::games::{self, Game};

/// Result of a draw: the new call plus the full history, newest first.
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub game: Game,
    pub call: Call,
    pub history: Vec<Call>,
}

pub struct CallService {
    range: SampleRange,
}

impl CallService {
    pub fn new(range: SampleRange) -> Self {
        Self { range }
    }

    /// Draw and persist a call. Every invocation appends a row.
    pub async fn draw_call<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<DrawOutcome, DomainError> {
        let game = games::require_game(conn, game_id).await?;

        let draw = CallDraw::draw(&mut rand::rng(), self.range);
        let call = calls::create_call(conn, game.id, &draw).await?;
        info!(
            game_id = game.id,
            call_id = call.id,
            column_number = %call.column_number,
            "call drawn"
        );

        let history = calls::list_by_game(conn, game.id).await?;
        Ok(DrawOutcome {
            game,
            call,
            history,
        })
    }
}
