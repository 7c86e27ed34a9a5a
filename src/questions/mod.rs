//! Prompt text for the board cards.

mod bank;

pub use bank::{Category, CategorySelection, QuestionBank, QuestionProvider};
