//! Adapters for external dependencies.

pub mod calls_sea;
pub mod cards_sea;
pub mod games_sea;
