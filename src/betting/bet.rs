//! A single wager on a goal slot.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, ValidationError, SLOT_COUNT};

/// An accepted bet. The stake has already been debited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bet {
    pub player: PlayerId,
    /// Goal slot in `0..SLOT_COUNT`.
    pub goal_slot: usize,
    /// Stake, always positive.
    pub amount: i64,
}

impl Bet {
    /// Check the slot and amount of a proposed bet.
    ///
    /// Funds are checked against the ledger separately.
    pub fn validate(goal_slot: usize, amount: i64) -> Result<(), ValidationError> {
        if amount <= 0 {
            return Err(ValidationError::InvalidAmount { amount });
        }
        if goal_slot >= SLOT_COUNT {
            return Err(ValidationError::SlotOutOfRange {
                slot: goal_slot,
                max: SLOT_COUNT - 1,
            });
        }
        Ok(())
    }
}
