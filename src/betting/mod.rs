//! Betting phase: each non-parent seat places one wager in turn.

mod bet;
mod queue;

pub use bet::Bet;
pub use queue::{BettingQueue, QueueState};
