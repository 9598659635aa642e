//! A single column + number draw.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::bingo::{parse_number_token, BingoColumn, SampleRange};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallDraw {
    column: BingoColumn,
    number: u8,
}

impl CallDraw {
    /// Draw a column from all five letters and a number from `range`,
    /// independently and uniformly.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, range: SampleRange) -> Self {
        let column = BingoColumn::ALL
            .choose(rng)
            .copied()
            .unwrap_or(BingoColumn::B);
        let number = rng.random_range(range.numbers());
        Self { column, number }
    }

    /// Rebuild from stored tokens.
    pub fn from_tokens(column: &str, number: &str) -> Result<Self, DomainError> {
        Ok(Self {
            column: column.parse()?,
            number: parse_number_token(number)?,
        })
    }

    pub fn column(&self) -> BingoColumn {
        self.column
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn number_token(&self) -> String {
        self.number.to_string()
    }

    /// `column ‖ number`, e.g. `"G17"`.
    pub fn column_number(&self) -> String {
        format!("{}{}", self.column, self.number)
    }
}
