//! Round orchestration.
//!
//! A session cycles through three phases:
//!
//! ```text
//! AwaitingRound --start_round--> Betting --queue closes--> ParentTurn
//!       ^                                                      |
//!       +------------------ ladder lands, settle --------------+
//! ```
//!
//! Each phase accepts only its own commands; anything else is a
//! `StateError`. Every command runs to completion before the next one is
//! looked at, and a rejected command changes nothing. Sharing a session
//! across threads means serializing calls behind one lock per session.

use tracing::{info, warn};

use super::event::{Command, SessionEvent};
use crate::betting::{Bet, BettingQueue, QueueState};
use crate::core::{GameError, GameRng, PlayerId, SessionConfig, StateError, ValidationError};
use crate::ladder::{Board, Choice, Ladder, LadderStep};
use crate::ledger::{Account, ChipLedger};
use crate::settlement::{settle, Settlement};

/// Which commands the session will accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Between rounds; waiting for `start_round`.
    AwaitingRound,
    /// Bettors are placing wagers in turn.
    Betting,
    /// The parent is descending the ladder.
    ParentTurn,
}

/// All state of one game session.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    ledger: ChipLedger,
    prompts: Vec<String>,
    rng: GameRng,
    round_number: u32,
    parent: PlayerId,
    phase: Phase,
    queue: BettingQueue,
    ladder: Ladder,
    board: Option<Board>,
    last_settlement: Option<Settlement>,
}

impl GameSession {
    pub(crate) fn new(
        config: SessionConfig,
        ledger: ChipLedger,
        prompts: Vec<String>,
        rng: GameRng,
        parent: PlayerId,
    ) -> Self {
        let player_count = ledger.player_count();
        Self {
            config,
            ledger,
            prompts,
            rng,
            round_number: 1,
            parent,
            phase: Phase::AwaitingRound,
            queue: BettingQueue::new(parent, player_count),
            ladder: Ladder::new(),
            board: None,
            last_settlement: None,
        }
    }

    // === Commands ===

    /// Route a renderer command.
    pub fn apply(&mut self, command: Command) -> Result<Vec<SessionEvent>, GameError> {
        match command {
            Command::StartRound => self.start_round(),
            Command::SubmitBet {
                player,
                goal_slot,
                amount,
            } => self.submit_bet(player, goal_slot, amount),
            Command::SubmitParentChoice(choice) => self.submit_parent_choice(choice),
        }
    }

    /// Begin the next round: deal a board, reset the ladder and open betting.
    pub fn start_round(&mut self) -> Result<Vec<SessionEvent>, GameError> {
        if self.phase != Phase::AwaitingRound {
            warn!(round = self.round_number, phase = ?self.phase, "start_round rejected");
            return Err(StateError::RoundInProgress.into());
        }

        let board = Board::deal(self.prompts.clone(), &mut self.rng)?;
        let mut queue = BettingQueue::new(self.parent, self.player_count());
        let state = queue.open()?;

        self.board = Some(board);
        self.ladder = Ladder::new();
        self.queue = queue;
        self.phase = Phase::Betting;
        info!(round = self.round_number, parent = %self.parent, "round started");

        let mut events = vec![SessionEvent::RoundStarted {
            round: self.round_number,
            parent: self.parent,
        }];
        self.after_queue_change(state, &mut events);
        Ok(events)
    }

    /// Place the active bettor's wager.
    pub fn submit_bet(
        &mut self,
        player: PlayerId,
        goal_slot: usize,
        amount: i64,
    ) -> Result<Vec<SessionEvent>, GameError> {
        if self.phase != Phase::Betting {
            warn!(%player, phase = ?self.phase, "bet outside betting phase");
            return Err(StateError::BettingClosed.into());
        }

        let state = self
            .queue
            .submit_bet(&mut self.ledger, self.round_number, player, goal_slot, amount)
            .inspect_err(|err| warn!(%player, goal_slot, amount, %err, "bet rejected"))?;

        let balance = self.ledger.balance(player)?;
        let mut events = vec![SessionEvent::BetPlaced {
            bet: Bet {
                player,
                goal_slot,
                amount,
            },
            balance,
        }];
        self.after_queue_change(state, &mut events);
        Ok(events)
    }

    fn after_queue_change(&mut self, state: QueueState, events: &mut Vec<SessionEvent>) {
        match state {
            QueueState::AwaitingBet(player) => events.push(SessionEvent::BettorUp { player }),
            QueueState::Closed => {
                self.phase = Phase::ParentTurn;
                info!(
                    round = self.round_number,
                    bets = self.queue.bet_count(),
                    "betting closed"
                );
                events.push(SessionEvent::BettingClosed);
            }
            QueueState::Idle => {}
        }
    }

    /// Apply the parent's YES/NO on the active card.
    pub fn submit_parent_choice(&mut self, choice: Choice) -> Result<Vec<SessionEvent>, GameError> {
        if self.phase != Phase::ParentTurn {
            warn!(?choice, phase = ?self.phase, "parent choice outside parent turn");
            return Err(StateError::NotParentTurn.into());
        }

        // The step is committed only once the round has settled, so a failed
        // settlement leaves the parent on the same card.
        let mut ladder = self.ladder;
        let events = match ladder.decide(choice)? {
            LadderStep::Advanced { level, slot } => {
                vec![SessionEvent::LadderAdvanced { level, slot }]
            }
            LadderStep::Landed { slot } => self.finish_round(slot)?,
        };
        self.ladder = ladder;
        Ok(events)
    }

    fn finish_round(&mut self, landed_slot: usize) -> Result<Vec<SessionEvent>, GameError> {
        let round = self.round_number;
        let bets = self.queue.bets();
        let settlement = settle(round, landed_slot, &bets, &mut self.ledger)
            .inspect_err(|err| warn!(round, landed_slot, %err, "settlement rejected"))?;
        info!(
            round = self.round_number,
            landed_slot,
            winners = settlement.winners.len(),
            paid = settlement.total_paid(),
            "round settled"
        );

        self.round_number += 1;
        self.parent = self.parent.next(self.player_count());
        self.phase = Phase::AwaitingRound;
        self.last_settlement = Some(settlement.clone());

        Ok(vec![
            SessionEvent::RoundSettled(settlement),
            SessionEvent::NextParent {
                player: self.parent,
            },
        ])
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of the current round, or of the next one between rounds.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Parent of the current round, or of the next one between rounds.
    #[must_use]
    pub fn parent(&self) -> PlayerId {
        self.parent
    }

    /// Seat expected to bet, during betting.
    #[must_use]
    pub fn active_bettor(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Betting => self.queue.active_bettor(),
            _ => None,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.ledger.player_count()
    }

    /// Session settings.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The chip ledger.
    #[must_use]
    pub fn ledger(&self) -> &ChipLedger {
        &self.ledger
    }

    /// A seat's account.
    pub fn account(&self, player: PlayerId) -> Result<&Account, ValidationError> {
        self.ledger.account(player)
    }

    /// A seat's balance.
    pub fn balance(&self, player: PlayerId) -> Result<i64, ValidationError> {
        self.ledger.balance(player)
    }

    /// The parent's position on the ladder.
    #[must_use]
    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// The board of the current or most recent round.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Prompt on the card the parent is deciding on.
    #[must_use]
    pub fn active_prompt(&self) -> Option<&str> {
        if self.phase != Phase::ParentTurn {
            return None;
        }
        let (row, col) = self.ladder.active_card()?;
        self.board.as_ref()?.prompt_at(row, col)
    }

    /// Bets accepted this round, in seat order.
    #[must_use]
    pub fn bets(&self) -> Vec<Bet> {
        self.queue.bets()
    }

    /// Bets on one goal slot, for drawing markers.
    #[must_use]
    pub fn bets_on(&self, goal_slot: usize) -> Vec<Bet> {
        self.queue
            .bets()
            .into_iter()
            .filter(|bet| bet.goal_slot == goal_slot)
            .collect()
    }

    /// Report of the last settled round.
    #[must_use]
    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.last_settlement.as_ref()
    }
}
