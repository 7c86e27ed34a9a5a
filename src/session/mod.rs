//! Session lifecycle: setup, rounds, and the command/event surface the
//! renderer talks to.

mod event;
mod lobby;
mod orchestrator;

pub use event::{Command, SessionEvent};
pub use lobby::Lobby;
pub use orchestrator::{GameSession, Phase};
