pub mod db;
pub mod server;

pub use db::{DbKind, DbSettings};
pub use server::ServerConfig;
