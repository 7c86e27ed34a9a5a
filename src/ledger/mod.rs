//! Chip ledger: balances and append-only transaction history per player.

mod entry;
mod account;

pub use entry::{LedgerEntry, LedgerReason, RoundLabel};
pub use account::{Account, ChipLedger};
