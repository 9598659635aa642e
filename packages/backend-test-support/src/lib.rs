//! Test helpers shared by the bingo backend's unit and integration tests.
//!
//! Kept free of backend types so it can be used from `#[cfg(test)]` modules
//! inside the backend crate as well as from its `tests/` binaries.

pub mod logging;
pub mod problem_details;
