//! Error codes surfaced in problem responses.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! maps 1:1 to the SCREAMING_SNAKE_CASE string in the `code` field.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Game id path segment is not a positive integer
    InvalidGameId,
    /// Card id path segment is not a positive integer
    InvalidCardId,
    /// Malformed request body or query
    BadRequest,
    /// General validation error
    ValidationError,

    // Resource Not Found
    GameNotFound,
    CardNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    UniqueViolation,
    Conflict,

    // Database
    DbError,
    DbUnavailable,
    DbTimeout,

    // System Errors
    Internal,
    ConfigError,
    /// Stored row does not decode into a valid domain value
    DataCorruption,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidCardId => "INVALID_CARD_ID",
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
