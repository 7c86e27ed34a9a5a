//! Payout settlement.
//!
//! Bets on the landed slot are paid `amount * multiplier`; every other bet
//! has already lost its stake at placement and gets nothing further.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::betting::Bet;
use crate::core::{PlayerId, ValidationError, SLOT_COUNT};
use crate::ledger::{ChipLedger, LedgerReason, RoundLabel};

/// Payout multiplier per goal slot. Edges pay most.
pub const SLOT_MULTIPLIERS: [i64; SLOT_COUNT] = [16, 8, 4, 4, 8, 16];

/// Multiplier for a goal slot.
#[must_use]
pub fn multiplier(slot: usize) -> Option<i64> {
    SLOT_MULTIPLIERS.get(slot).copied()
}

/// One winning bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub player: PlayerId,
    pub stake: i64,
    /// Chips credited (`stake * multiplier`).
    pub amount: i64,
    /// Balance after the credit.
    pub balance: i64,
}

/// Outcome of a settled round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub round: u32,
    pub landed_slot: usize,
    pub multiplier: i64,
    /// Winners in seat order; empty when nobody picked the slot.
    pub winners: Vec<Payout>,
}

impl Settlement {
    /// Check whether anybody won.
    #[must_use]
    pub fn has_winners(&self) -> bool {
        !self.winners.is_empty()
    }

    /// Total chips paid out.
    #[must_use]
    pub fn total_paid(&self) -> i64 {
        self.winners.iter().map(|p| p.amount).sum()
    }
}

/// Credit every bet on `landed_slot`.
///
/// `bets` may come in any order; winners are reported in seat order. Every
/// payout is checked before the first credit, so a payout that would
/// overflow a balance fails with [`ValidationError::ChipOverflow`] and
/// leaves the ledger untouched.
pub fn settle(
    round: u32,
    landed_slot: usize,
    bets: &[Bet],
    ledger: &mut ChipLedger,
) -> Result<Settlement, ValidationError> {
    let multiplier = multiplier(landed_slot).ok_or(ValidationError::SlotOutOfRange {
        slot: landed_slot,
        max: SLOT_COUNT - 1,
    })?;

    let mut winning: Vec<&Bet> = bets
        .iter()
        .filter(|bet| bet.goal_slot == landed_slot)
        .collect();
    winning.sort_by_key(|bet| bet.player);

    // Sorted by seat, so repeat bets from one seat are adjacent.
    let mut winners: Vec<Payout> = Vec::with_capacity(winning.len());
    for bet in winning {
        let player = bet.player;
        let amount = bet
            .amount
            .checked_mul(multiplier)
            .ok_or(ValidationError::ChipOverflow {
                player,
                diff: bet.amount.saturating_mul(multiplier),
            })?;
        let before = match winners.last() {
            Some(prev) if prev.player == player => prev.balance,
            _ => ledger.balance(player)?,
        };
        let balance = before
            .checked_add(amount)
            .ok_or(ValidationError::ChipOverflow { player, diff: amount })?;
        winners.push(Payout {
            player,
            stake: bet.amount,
            amount,
            balance,
        });
    }

    for payout in &winners {
        ledger.credit(
            payout.player,
            payout.amount,
            RoundLabel::Round(round),
            LedgerReason::BetWon,
        )?;
        debug!(
            player = %payout.player,
            stake = payout.stake,
            amount = payout.amount,
            balance = payout.balance,
            "payout"
        );
    }

    Ok(Settlement {
        round,
        landed_slot,
        multiplier,
        winners,
    })
}
