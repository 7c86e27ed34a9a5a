//! Notifications for the renderer and commands coming back from it.

use serde::{Deserialize, Serialize};

use crate::betting::Bet;
use crate::core::PlayerId;
use crate::ladder::Choice;
use crate::settlement::Settlement;

/// Something the renderer should show.
///
/// Every command returns the events it produced, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A round began and a fresh board was dealt.
    RoundStarted { round: u32, parent: PlayerId },

    /// This seat should place a bet now.
    BettorUp { player: PlayerId },

    /// A bet was accepted; `balance` is the bettor's balance after the stake.
    BetPlaced { bet: Bet, balance: i64 },

    /// Every bettor has bet; the parent starts down the ladder.
    BettingClosed,

    /// The parent moved to the card at `(level, slot)`.
    LadderAdvanced { level: usize, slot: usize },

    /// The parent reached a goal and bets were paid.
    RoundSettled(Settlement),

    /// Who will be parent when the next round starts.
    NextParent { player: PlayerId },
}

/// A discrete action from the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    StartRound,
    SubmitBet {
        player: PlayerId,
        goal_slot: usize,
        amount: i64,
    },
    SubmitParentChoice(Choice),
}

impl Command {
    /// `submitParentChoice(isYes)`.
    #[must_use]
    pub fn parent_choice(is_yes: bool) -> Self {
        Command::SubmitParentChoice(Choice::from(is_yes))
    }
}
