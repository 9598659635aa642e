//! DTOs for calls_sea adapter.

/// DTO for recording a drawn call.
#[derive(Debug, Clone)]
pub struct CallCreate {
    pub game_id: i64,
    pub column_letter: String,
    pub number: String,
    pub column_number: String,
}
