//! Repository functions for domain layer.

pub mod calls;
pub mod cards;
pub mod games;
