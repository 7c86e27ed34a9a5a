//! The pyramid of prompt cards dealt for a round.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, ValidationError, BOARD_CARDS, LADDER_LEVELS};

/// One prompt card at `(row, col)`, `col <= row`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub row: usize,
    pub col: usize,
    pub prompt: String,
}

/// Fifteen cards in rows of 1 to 5, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Shuffle `prompts` and lay the first fifteen onto the pyramid.
    pub fn deal(mut prompts: Vec<String>, rng: &mut GameRng) -> Result<Self, ValidationError> {
        if prompts.len() < BOARD_CARDS {
            return Err(ValidationError::InsufficientContent {
                available: prompts.len(),
                required: BOARD_CARDS,
            });
        }

        rng.shuffle(&mut prompts);
        let mut prompts = prompts.into_iter();

        let mut cards = Vec::with_capacity(BOARD_CARDS);
        for row in 0..LADDER_LEVELS {
            for col in 0..=row {
                if let Some(prompt) = prompts.next() {
                    cards.push(Card { row, col, prompt });
                }
            }
        }

        Ok(Self { cards })
    }

    /// Offset of `(row, col)` in row-major pyramid order.
    fn offset(row: usize, col: usize) -> Option<usize> {
        (row < LADDER_LEVELS && col <= row).then(|| row * (row + 1) / 2 + col)
    }

    /// Card at a position, if it is on the pyramid.
    #[must_use]
    pub fn card(&self, row: usize, col: usize) -> Option<&Card> {
        Self::offset(row, col).and_then(|i| self.cards.get(i))
    }

    /// Prompt text at a position.
    #[must_use]
    pub fn prompt_at(&self, row: usize, col: usize) -> Option<&str> {
        self.card(row, col).map(|card| card.prompt.as_str())
    }

    /// All cards of one row, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Card] {
        match Self::offset(row, 0) {
            Some(start) => &self.cards[start..start + row + 1],
            None => &[],
        }
    }

    /// All cards row by row.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Q{i}")).collect()
    }

    #[test]
    fn test_deal_fills_pyramid() {
        let mut rng = GameRng::new(42);
        let board = Board::deal(prompts(20), &mut rng).unwrap();

        assert_eq!(board.cards().len(), BOARD_CARDS);
        for row in 0..LADDER_LEVELS {
            let cards = board.row(row);
            assert_eq!(cards.len(), row + 1);
            for (col, card) in cards.iter().enumerate() {
                assert_eq!((card.row, card.col), (row, col));
                assert_eq!(board.prompt_at(row, col), Some(card.prompt.as_str()));
            }
        }
    }

    #[test]
    fn test_deal_uses_distinct_prompts() {
        let mut rng = GameRng::new(1);
        let board = Board::deal(prompts(15), &mut rng).unwrap();

        let mut dealt: Vec<_> = board.cards().iter().map(|c| c.prompt.clone()).collect();
        dealt.sort();
        let mut expected = prompts(15);
        expected.sort();
        assert_eq!(dealt, expected);
    }

    #[test]
    fn test_deal_is_deterministic_per_seed() {
        let a = Board::deal(prompts(30), &mut GameRng::new(9)).unwrap();
        let b = Board::deal(prompts(30), &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_insufficient_content() {
        let mut rng = GameRng::new(42);
        assert_eq!(
            Board::deal(prompts(14), &mut rng),
            Err(ValidationError::InsufficientContent {
                available: 14,
                required: 15
            })
        );
    }

    #[test]
    fn test_off_board_positions() {
        let board = Board::deal(prompts(15), &mut GameRng::new(42)).unwrap();

        assert!(board.card(0, 1).is_none());
        assert!(board.card(5, 0).is_none());
        assert!(board.row(5).is_empty());
    }
}
