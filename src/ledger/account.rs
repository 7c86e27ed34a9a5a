//! Per-player accounts and the chip ledger that owns them.
//!
//! Every balance change goes through [`ChipLedger::debit`] or
//! [`ChipLedger::credit`], which append a [`LedgerEntry`] and update the
//! cached balance together. The sum of an account's diffs therefore always
//! equals `chips - initial_chips`.
//!
//! History uses `im::Vector` so cloning a session for the renderer is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entry::{LedgerEntry, LedgerReason, RoundLabel};
use crate::core::{PlayerId, PlayerMap, ValidationError};

/// A player's name, balance and transaction history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    name: String,
    chips: i64,
    initial_chips: i64,
    history: Vector<LedgerEntry>,
}

impl Account {
    /// Open an account with its initial entry.
    #[must_use]
    pub fn open(name: impl Into<String>, starting_chips: i64) -> Self {
        let mut history = Vector::new();
        history.push_back(LedgerEntry::opening(starting_chips));
        Self {
            name: name.into(),
            chips: starting_chips,
            initial_chips: starting_chips,
            history,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current balance.
    #[must_use]
    pub fn chips(&self) -> i64 {
        self.chips
    }

    /// Balance at session start.
    #[must_use]
    pub fn initial_chips(&self) -> i64 {
        self.initial_chips
    }

    /// Entries oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &LedgerEntry> {
        self.history.iter()
    }

    /// Entries newest first, as the history table lists them.
    pub fn history_newest_first(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.history.iter().rev()
    }

    /// Most recent entry. Every account has at least its opening entry.
    #[must_use]
    pub fn last_entry(&self) -> Option<&LedgerEntry> {
        self.history.last()
    }

    fn apply(
        &mut self,
        player: PlayerId,
        diff: i64,
        round: RoundLabel,
        reason: LedgerReason,
    ) -> Result<i64, ValidationError> {
        let balance = self
            .chips
            .checked_add(diff)
            .ok_or(ValidationError::ChipOverflow { player, diff })?;
        self.chips = balance;
        self.history.push_back(LedgerEntry {
            round,
            reason,
            diff,
            balance,
        });
        Ok(balance)
    }
}

/// All accounts at the table, indexed by seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipLedger {
    accounts: PlayerMap<Account>,
}

impl ChipLedger {
    /// Open one account per name, each with `starting_chips`.
    ///
    /// `names` must be non-empty; the lobby checks the table size first.
    #[must_use]
    pub fn initialize(names: &[String], starting_chips: i64) -> Self {
        let accounts = names
            .iter()
            .map(|name| Account::open(name.clone(), starting_chips))
            .collect();
        Self {
            accounts: PlayerMap::from_vec(accounts),
        }
    }

    /// Number of accounts.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.accounts.player_count()
    }

    /// Look up an account.
    pub fn account(&self, player: PlayerId) -> Result<&Account, ValidationError> {
        self.accounts
            .try_get(player)
            .ok_or(ValidationError::UnknownPlayer { player })
    }

    /// Current balance of a seat.
    pub fn balance(&self, player: PlayerId) -> Result<i64, ValidationError> {
        self.account(player).map(Account::chips)
    }

    /// Iterate accounts in seat order.
    pub fn accounts(&self) -> impl Iterator<Item = (PlayerId, &Account)> {
        self.accounts.iter()
    }

    /// Take `amount` chips from a seat.
    ///
    /// Requires `amount > 0` and a balance of at least `amount`. On error
    /// nothing is recorded. Returns the new balance.
    pub fn debit(
        &mut self,
        player: PlayerId,
        amount: i64,
        round: RoundLabel,
        reason: LedgerReason,
    ) -> Result<i64, ValidationError> {
        let available = self.balance(player)?;
        if amount <= 0 {
            return Err(ValidationError::InvalidAmount { amount });
        }
        if available < amount {
            return Err(ValidationError::InsufficientFunds {
                player,
                needed: amount,
                available,
            });
        }

        let balance = self.accounts[player].apply(player, -amount, round, reason)?;
        debug!(%player, amount, balance, %round, %reason, "debit");
        Ok(balance)
    }

    /// Give `amount` chips to a seat. Returns the new balance.
    ///
    /// A credit that would overflow the balance is rejected with
    /// [`ValidationError::ChipOverflow`] and nothing is recorded.
    pub fn credit(
        &mut self,
        player: PlayerId,
        amount: i64,
        round: RoundLabel,
        reason: LedgerReason,
    ) -> Result<i64, ValidationError> {
        self.account(player)?;
        if amount < 0 {
            return Err(ValidationError::InvalidAmount { amount });
        }

        let balance = self.accounts[player].apply(player, amount, round, reason)?;
        debug!(%player, amount, balance, %round, %reason, "credit");
        Ok(balance)
    }
}
