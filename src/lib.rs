//! # ladder-party
//!
//! Round engine for a YES/NO ladder party game.
//!
//! One player, the **parent**, walks down a pyramid of prompt cards by
//! answering YES or NO at each of five rows and lands on one of six goal
//! slots. Before the walk, every other player bets chips on the slot they
//! think the parent will reach. Edge slots pay more than centre ones.
//!
//! ## Design Principles
//!
//! 1. **Explicit session**: all state lives in a [`GameSession`] value that
//!    owns the ledger, queue and ladder. There are no globals.
//!
//! 2. **Commands in, events out**: the renderer sends [`Command`]s and
//!    receives the [`SessionEvent`]s each one produced. Waiting for input is
//!    a phase, not a blocked call.
//!
//! 3. **Reject, never half-apply**: a rejected command returns a
//!    [`GameError`] and leaves the session unchanged.
//!
//! ## Modules
//!
//! - `core`: seats, configuration, errors, RNG
//! - `ledger`: chip balances and transaction history
//! - `betting`: turn-ordered wager capture
//! - `ladder`: prompt board and the parent's traversal
//! - `settlement`: slot multipliers and payouts
//! - `questions`: question provider contract and bank
//! - `session`: lobby, round orchestration, commands and events
//!
//! ## Example
//!
//! ```
//! use ladder_party::{Choice, Command, Lobby, QuestionBank, SessionConfig, PlayerId};
//!
//! let mut bank = QuestionBank::new();
//! bank.add_category("misc", "Misc", (0..15).map(|i| format!("Question {i}?")));
//!
//! let mut lobby = Lobby::new();
//! lobby.add_player("Ann").unwrap();
//! lobby.add_player("Ben").unwrap();
//!
//! let config = SessionConfig::default().with_initial_parent(PlayerId::new(0));
//! let mut session = lobby.start(config, &bank).unwrap();
//!
//! session.apply(Command::StartRound).unwrap();
//! session
//!     .apply(Command::SubmitBet { player: PlayerId::new(1), goal_slot: 0, amount: 10 })
//!     .unwrap();
//! for _ in 0..5 {
//!     session.apply(Command::SubmitParentChoice(Choice::Yes)).unwrap();
//! }
//!
//! // Slot 0 pays 16x.
//! assert_eq!(session.balance(PlayerId::new(1)), Ok(100 - 10 + 160));
//! assert_eq!(session.parent(), PlayerId::new(1));
//! ```

pub mod core;
pub mod ledger;
pub mod betting;
pub mod ladder;
pub mod settlement;
pub mod questions;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, ParentSelection, PlayerId, PlayerMap, SessionConfig, StateError,
    ValidationError, BOARD_CARDS, LADDER_LEVELS, MAX_STARTING_CHIPS, MIN_PLAYERS, SLOT_COUNT,
};

pub use crate::ledger::{Account, ChipLedger, LedgerEntry, LedgerReason, RoundLabel};

pub use crate::betting::{Bet, BettingQueue, QueueState};

pub use crate::ladder::{Board, Card, Choice, Ladder, LadderStep};

pub use crate::settlement::{settle, Payout, Settlement, SLOT_MULTIPLIERS};

pub use crate::questions::{Category, CategorySelection, QuestionBank, QuestionProvider};

pub use crate::session::{Command, GameSession, Lobby, Phase, SessionEvent};
