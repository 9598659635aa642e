//! Value domains shared by cards and calls.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::errors::domain::DomainError;

/// Tokens on a card.
pub const CARD_SIZE: usize = 25;
/// Cells per card row (one per column letter).
pub const GRID_WIDTH: usize = 5;
/// Highest number printed on the board.
pub const MAX_NUMBER: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BingoColumn {
    B,
    I,
    N,
    G,
    O,
}

impl BingoColumn {
    pub const ALL: [BingoColumn; GRID_WIDTH] = [
        BingoColumn::B,
        BingoColumn::I,
        BingoColumn::N,
        BingoColumn::G,
        BingoColumn::O,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BingoColumn::B => "B",
            BingoColumn::I => "I",
            BingoColumn::N => "N",
            BingoColumn::G => "G",
            BingoColumn::O => "O",
        }
    }
}

impl fmt::Display for BingoColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BingoColumn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BingoColumn::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("Column {s} is not allowed.")))
    }
}

/// Which slice of the value domains the generators sample from.
///
/// `Legacy` reproduces the historical number draw, which never picks the top
/// value, so numbers fall in `1..=29`. `Full` samples `1..=30`. Columns are
/// always drawn from all five letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleRange {
    #[default]
    Legacy,
    Full,
}

impl SampleRange {
    pub fn numbers(self) -> RangeInclusive<u8> {
        match self {
            SampleRange::Legacy => 1..=MAX_NUMBER - 1,
            SampleRange::Full => 1..=MAX_NUMBER,
        }
    }
}

/// Parse a stored number token, accepting anything on the board (`1..=30`).
pub fn parse_number_token(token: &str) -> Result<u8, DomainError> {
    token
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=MAX_NUMBER).contains(n))
        .ok_or_else(|| DomainError::validation(format!("Number {token} is not allowed.")))
}
