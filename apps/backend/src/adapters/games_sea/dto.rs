//! DTOs for games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone, Default)]
pub struct GameCreate {
    pub title: String,
}

impl GameCreate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
