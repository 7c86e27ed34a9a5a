//! Round settlement: pays out bets on the landed goal slot.

mod payout;

pub use payout::{multiplier, settle, Payout, Settlement, SLOT_MULTIPLIERS};
