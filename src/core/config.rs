//! Session configuration and table constants.

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::questions::CategorySelection;

/// Fewest players a session can start with (one parent, one bettor).
pub const MIN_PLAYERS: usize = 2;

/// Most players a session can seat (`PlayerId` is a `u8`).
pub const MAX_PLAYERS: usize = 255;

/// Largest accepted starting balance. Leaves headroom for many rounds of
/// top-multiplier wins before an `i64` balance runs out.
pub const MAX_STARTING_CHIPS: i64 = 1_000_000_000;

/// Number of YES/NO decisions between the top card and a goal.
pub const LADDER_LEVELS: usize = 5;

/// Number of goal slots under the pyramid.
pub const SLOT_COUNT: usize = LADDER_LEVELS + 1;

/// Cards on the pyramid: rows of 1, 2, 3, 4 and 5.
pub const BOARD_CARDS: usize = LADDER_LEVELS * (LADDER_LEVELS + 1) / 2;

/// How the first parent of a session is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentSelection {
    /// Any seat, drawn from the session RNG.
    #[default]
    Random,
    /// A specific seat.
    Fixed(PlayerId),
}

/// Settings chosen on the setup screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Chips every player starts with, in `1..=MAX_STARTING_CHIPS`.
    pub starting_chips: i64,

    /// Which question category fills the board.
    pub category: CategorySelection,

    /// First parent of the session.
    pub initial_parent: ParentSelection,

    /// Seed for parent selection and board dealing.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            category: CategorySelection::All,
            initial_parent: ParentSelection::Random,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Set the starting chip count.
    pub fn with_starting_chips(mut self, chips: i64) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Set the question category.
    pub fn with_category(mut self, category: CategorySelection) -> Self {
        self.category = category;
        self
    }

    /// Fix the first parent instead of drawing one.
    pub fn with_initial_parent(mut self, parent: PlayerId) -> Self {
        self.initial_parent = ParentSelection::Fixed(parent);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
