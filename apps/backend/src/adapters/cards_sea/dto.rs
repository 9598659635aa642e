//! DTOs for cards_sea adapter.

/// DTO for dealing a card into a game.
#[derive(Debug, Clone)]
pub struct CardCreate {
    pub game_id: i64,
    pub numbers: Vec<String>,
}

impl CardCreate {
    pub fn new(game_id: i64, numbers: Vec<String>) -> Self {
        Self { game_id, numbers }
    }
}
