//! Domain layer: value domains and the card/call generators.

pub mod bingo;
pub mod call_draw;
pub mod card_numbers;

// Re-exports for ergonomics
pub use bingo::{BingoColumn, SampleRange, CARD_SIZE, GRID_WIDTH, MAX_NUMBER};
pub use call_draw::CallDraw;
pub use card_numbers::CardNumbers;
