//! The 25 tokens printed on a card.

use rand::Rng;

use super::bingo::{parse_number_token, SampleRange, CARD_SIZE, GRID_WIDTH};
use crate::errors::domain::DomainError;

/// Ordered card tokens, fixed at [`CARD_SIZE`].
///
/// Each slot is sampled independently, so duplicates are allowed and the
/// tokens are not partitioned by column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumbers(Vec<String>);

impl CardNumbers {
    /// Deal a fresh card.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, range: SampleRange) -> Self {
        let numbers = range.numbers();
        let tokens = (0..CARD_SIZE)
            .map(|_| rng.random_range(numbers.clone()).to_string())
            .collect();
        Self(tokens)
    }

    /// Rebuild from stored tokens, rejecting anything that could not have
    /// been dealt.
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self, DomainError> {
        if tokens.len() != CARD_SIZE {
            return Err(DomainError::validation(format!(
                "card must have {CARD_SIZE} numbers, found {}",
                tokens.len()
            )));
        }
        for token in &tokens {
            parse_number_token(token)?;
        }
        Ok(Self(tokens))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Row-major grid rows of [`GRID_WIDTH`] tokens.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.0.chunks(GRID_WIDTH)
    }
}
