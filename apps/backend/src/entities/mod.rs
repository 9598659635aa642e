pub mod calls;
pub mod cards;
pub mod games;

pub use calls::Entity as Calls;
pub use calls::Model as Call;
pub use cards::Entity as Cards;
pub use cards::Model as Card;
pub use games::Entity as Games;
pub use games::Model as Game;
