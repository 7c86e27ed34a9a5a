//! Ladder traversal: the parent's walk down the pyramid.
//!
//! State is `(level, slot)` with `slot <= level`. YES keeps the slot, NO
//! moves one slot right, and both move one level down. After
//! `LADDER_LEVELS` decisions the slot names the goal the parent landed on.
//! There is no randomness here; the outcome is whatever the parent chose.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{StateError, LADDER_LEVELS};

/// A parent decision on the active card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Yes,
    No,
}

impl From<bool> for Choice {
    fn from(is_yes: bool) -> Self {
        if is_yes {
            Choice::Yes
        } else {
            Choice::No
        }
    }
}

/// Result of applying one decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LadderStep {
    /// Moved to the card at `(level, slot)`.
    Advanced { level: usize, slot: usize },
    /// Reached the goal row.
    Landed { slot: usize },
}

/// Position on the pyramid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ladder {
    level: usize,
    slot: usize,
}

impl Ladder {
    /// Start at the top card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decisions made so far (0..=LADDER_LEVELS).
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Column on the current row; the goal slot once finished.
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Check whether the goal row has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.level >= LADDER_LEVELS
    }

    /// Card the parent is deciding on, or `None` once finished.
    #[must_use]
    pub fn active_card(&self) -> Option<(usize, usize)> {
        (!self.is_finished()).then_some((self.level, self.slot))
    }

    /// Landed goal slot, once finished.
    #[must_use]
    pub fn landed_slot(&self) -> Option<usize> {
        self.is_finished().then_some(self.slot)
    }

    /// Apply one decision.
    pub fn decide(&mut self, choice: Choice) -> Result<LadderStep, StateError> {
        if self.is_finished() {
            return Err(StateError::LadderFinished);
        }

        if choice == Choice::No {
            self.slot += 1;
        }
        self.level += 1;
        debug!(?choice, level = self.level, slot = self.slot, "ladder step");

        Ok(if self.is_finished() {
            LadderStep::Landed { slot: self.slot }
        } else {
            LadderStep::Advanced {
                level: self.level,
                slot: self.slot,
            }
        })
    }
}
