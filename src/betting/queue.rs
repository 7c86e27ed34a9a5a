//! Betting queue: turn order and wager capture for one round.
//!
//! ```text
//! Idle --open--> AwaitingBet(p) --submit ok--> AwaitingBet(q) ... --> Closed
//! ```
//!
//! The queue holds every seat except the parent, in seat order. A rejected
//! submission leaves the queue exactly as it was; an accepted one debits
//! the stake and moves to the next bettor.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::bet::Bet;
use crate::core::{GameError, PlayerId, StateError};
use crate::ledger::{ChipLedger, LedgerReason, RoundLabel};

/// Where the queue is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueState {
    /// Built but not yet opened.
    Idle,
    /// Waiting for this seat to bet.
    AwaitingBet(PlayerId),
    /// Every bettor has bet.
    Closed,
}

/// Pending bettors and accepted bets for the current round.
#[derive(Clone, Debug)]
pub struct BettingQueue {
    state: QueueState,
    pending: SmallVec<[PlayerId; 8]>,
    bets: FxHashMap<PlayerId, Bet>,
}

impl BettingQueue {
    /// Queue every seat except `parent`, in seat order.
    #[must_use]
    pub fn new(parent: PlayerId, player_count: usize) -> Self {
        let pending = PlayerId::all(player_count)
            .filter(|&p| p != parent)
            .collect();
        Self {
            state: QueueState::Idle,
            pending,
            bets: FxHashMap::default(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> QueueState {
        self.state
    }

    /// Seat expected to bet next, if any.
    #[must_use]
    pub fn active_bettor(&self) -> Option<PlayerId> {
        match self.state {
            QueueState::AwaitingBet(player) => Some(player),
            _ => None,
        }
    }

    /// Seats still waiting behind the active bettor.
    #[must_use]
    pub fn pending(&self) -> &[PlayerId] {
        &self.pending
    }

    /// Check whether the queue has closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == QueueState::Closed
    }

    /// Open betting and hand the turn to the first bettor.
    ///
    /// A queue opens once; calling this again is a state error and leaves
    /// the active bettor in place.
    pub fn open(&mut self) -> Result<QueueState, StateError> {
        if self.state != QueueState::Idle {
            return Err(StateError::BettingAlreadyOpen);
        }
        self.advance();
        Ok(self.state)
    }

    fn advance(&mut self) {
        self.state = if self.pending.is_empty() {
            QueueState::Closed
        } else {
            QueueState::AwaitingBet(self.pending.remove(0))
        };
    }

    /// Submit the active bettor's wager.
    ///
    /// Validates amount, slot and funds before touching anything. On success
    /// the stake is debited, the bet recorded, and the queue advances.
    pub fn submit_bet(
        &mut self,
        ledger: &mut ChipLedger,
        round: u32,
        player: PlayerId,
        goal_slot: usize,
        amount: i64,
    ) -> Result<QueueState, GameError> {
        let expected = self.active_bettor().ok_or(StateError::BettingClosed)?;
        if expected != player {
            return Err(StateError::NotBettorsTurn {
                expected,
                got: player,
            }
            .into());
        }

        Bet::validate(goal_slot, amount)?;
        ledger.debit(player, amount, RoundLabel::Round(round), LedgerReason::BetPlaced)?;

        let bet = Bet {
            player,
            goal_slot,
            amount,
        };
        self.bets.insert(player, bet);
        debug!(%player, goal_slot, amount, round, "bet accepted");

        self.advance();
        Ok(self.state)
    }

    /// Number of accepted bets.
    #[must_use]
    pub fn bet_count(&self) -> usize {
        self.bets.len()
    }

    /// Accepted bet for a seat.
    #[must_use]
    pub fn bet(&self, player: PlayerId) -> Option<&Bet> {
        self.bets.get(&player)
    }

    /// Accepted bets in seat order.
    #[must_use]
    pub fn bets(&self) -> Vec<Bet> {
        let mut bets: Vec<Bet> = self.bets.values().copied().collect();
        bets.sort_by_key(|bet| bet.player);
        bets
    }
}
