//! Core types shared by every component: seats, configuration, errors, RNG.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{
    ParentSelection, SessionConfig, BOARD_CARDS, LADDER_LEVELS, MAX_PLAYERS, MAX_STARTING_CHIPS,
    MIN_PLAYERS, SLOT_COUNT,
};
pub use error::{GameError, StateError, ValidationError};
