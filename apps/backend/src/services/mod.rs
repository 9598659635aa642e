pub mod calls;
pub mod cards;
pub mod games;

pub use calls::{CallService, DrawOutcome};
pub use cards::{load_card_with_game, CardService};
pub use games::GameService;
