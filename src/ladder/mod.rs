//! The YES/NO pyramid: prompt board and the parent's traversal of it.

mod board;
mod traversal;

pub use board::{Board, Card};
pub use traversal::{Choice, Ladder, LadderStep};
