//! Error taxonomy.
//!
//! - `ValidationError`: bad input from a player (amount, slot, funds,
//!   content, table size). The action is rejected and nothing changes.
//! - `StateError`: a command arrived in the wrong phase or from the wrong
//!   seat. This is a caller contract violation and is rejected, never
//!   silently ignored.
//!
//! Neither is fatal; correcting the input and resubmitting always works.

use thiserror::Error;

use super::player::PlayerId;

/// A rejected player input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bet amount must be a positive number of chips (got {amount})")]
    InvalidAmount { amount: i64 },

    #[error("goal slot {slot} is out of range (0..={max})")]
    SlotOutOfRange { slot: usize, max: usize },

    #[error("{player} has {available} chips but needs {needed}")]
    InsufficientFunds {
        player: PlayerId,
        needed: i64,
        available: i64,
    },

    #[error("not enough prompts to fill the board (have {available}, need {required})")]
    InsufficientContent { available: usize, required: usize },

    #[error("at least {min} players are required (got {count})")]
    TooFewPlayers { count: usize, min: usize },

    #[error("at most {max} players are supported")]
    TooManyPlayers { max: usize },

    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error("starting chips must be in 1..={max} (got {chips})")]
    InvalidStartingChips { chips: i64, max: i64 },

    #[error("{player}'s balance cannot hold a change of {diff} chips")]
    ChipOverflow { player: PlayerId, diff: i64 },

    #[error("{player} is not seated at this table")]
    UnknownPlayer { player: PlayerId },
}

/// A command issued in the wrong phase.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("betting is not open")]
    BettingClosed,

    #[error("it is {expected}'s turn to bet, not {got}'s")]
    NotBettorsTurn { expected: PlayerId, got: PlayerId },

    #[error("the parent may only choose once betting has closed")]
    NotParentTurn,

    #[error("the ladder has already reached a goal")]
    LadderFinished,

    #[error("a round is already in progress")]
    RoundInProgress,

    #[error("betting has already been opened for this round")]
    BettingAlreadyOpen,
}

/// Any error surfaced by the game engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError {
    /// True for rejected player input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, GameError::Validation(_))
    }

    /// True for wrong-phase commands.
    #[must_use]
    pub fn is_state(&self) -> bool {
        matches!(self, GameError::State(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InsufficientFunds {
            player: PlayerId::new(1),
            needed: 10,
            available: 5,
        };
        assert_eq!(err.to_string(), "Seat 1 has 5 chips but needs 10");

        let err = StateError::NotBettorsTurn {
            expected: PlayerId::new(2),
            got: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "it is Seat 2's turn to bet, not Seat 0's");

        let err = ValidationError::ChipOverflow {
            player: PlayerId::new(1),
            diff: 160,
        };
        assert_eq!(err.to_string(), "Seat 1's balance cannot hold a change of 160 chips");
    }

    #[test]
    fn test_game_error_classification() {
        let validation: GameError = ValidationError::EmptyPlayerName.into();
        let state: GameError = StateError::BettingClosed.into();

        assert!(validation.is_validation());
        assert!(!validation.is_state());
        assert!(state.is_state());
        assert_eq!(state.to_string(), "betting is not open");
    }
}
