//! Ledger entries: one immutable row per balance change.

use serde::{Deserialize, Serialize};

/// Round an entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundLabel {
    /// The opening balance, recorded before any round.
    Initial,
    /// A numbered round (starts at 1).
    Round(u32),
}

impl std::fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundLabel::Initial => f.write_str("-"),
            RoundLabel::Round(n) => write!(f, "{n}"),
        }
    }
}

/// Why a balance changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerReason {
    /// Opening balance.
    Initial,
    /// Stake taken when a bet was accepted.
    BetPlaced,
    /// Payout for a bet on the landed slot.
    BetWon,
}

impl std::fmt::Display for LedgerReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LedgerReason::Initial => "initial",
            LedgerReason::BetPlaced => "bet placed",
            LedgerReason::BetWon => "bet won",
        };
        f.write_str(label)
    }
}

/// A single append-only ledger row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub round: RoundLabel,
    pub reason: LedgerReason,
    /// Signed change applied by this entry.
    pub diff: i64,
    /// Balance after the change.
    pub balance: i64,
}

impl LedgerEntry {
    /// Opening entry for a new account.
    #[must_use]
    pub fn opening(balance: i64) -> Self {
        Self {
            round: RoundLabel::Initial,
            reason: LedgerReason::Initial,
            diff: 0,
            balance,
        }
    }

    /// Diff formatted the way the history table shows it (`+80`, `-10`, `0`).
    #[must_use]
    pub fn signed_diff(&self) -> String {
        if self.diff > 0 {
            format!("+{}", self.diff)
        } else {
            self.diff.to_string()
        }
    }
}
