pub mod calls;
pub mod create_game;
pub mod healthcheck;
