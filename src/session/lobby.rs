//! Setup screen: collect players, then start a session.

use tracing::info;

use super::orchestrator::GameSession;
use crate::core::{
    GameError, GameRng, ParentSelection, PlayerId, SessionConfig, ValidationError, BOARD_CARDS,
    MAX_PLAYERS, MAX_STARTING_CHIPS, MIN_PLAYERS,
};
use crate::ledger::ChipLedger;
use crate::questions::QuestionProvider;

/// Players gathered before the first round.
#[derive(Clone, Debug, Default)]
pub struct Lobby {
    names: Vec<String>,
}

impl Lobby {
    /// Create an empty lobby.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player. The name is trimmed and must not be empty.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyPlayerName);
        }
        self.seat(name.to_string())
    }

    /// Seat a player named after their position (`Player 3`).
    pub fn add_default_player(&mut self) -> Result<PlayerId, ValidationError> {
        let name = format!("Player {}", self.names.len() + 1);
        self.seat(name)
    }

    fn seat(&mut self, name: String) -> Result<PlayerId, ValidationError> {
        if self.names.len() >= MAX_PLAYERS {
            return Err(ValidationError::TooManyPlayers { max: MAX_PLAYERS });
        }
        let id = PlayerId::new(self.names.len() as u8);
        self.names.push(name);
        Ok(id)
    }

    /// Names in seat order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.names
    }

    /// Validate the setup and open the session.
    ///
    /// Checks table size, starting chips, the first parent and that the
    /// selected category can fill a board, then opens every account. The
    /// session waits for `start_round` before the first round begins.
    pub fn start(
        self,
        config: SessionConfig,
        provider: &impl QuestionProvider,
    ) -> Result<GameSession, GameError> {
        let count = self.names.len();
        if count < MIN_PLAYERS {
            return Err(ValidationError::TooFewPlayers {
                count,
                min: MIN_PLAYERS,
            }
            .into());
        }
        if !(1..=MAX_STARTING_CHIPS).contains(&config.starting_chips) {
            return Err(ValidationError::InvalidStartingChips {
                chips: config.starting_chips,
                max: MAX_STARTING_CHIPS,
            }
            .into());
        }

        let prompts = provider.prompts(&config.category);
        if prompts.len() < BOARD_CARDS {
            return Err(ValidationError::InsufficientContent {
                available: prompts.len(),
                required: BOARD_CARDS,
            }
            .into());
        }

        let rng = GameRng::new(config.seed);
        let parent = match config.initial_parent {
            ParentSelection::Random => {
                PlayerId::new(rng.for_context("parent").gen_range_usize(0..count) as u8)
            }
            ParentSelection::Fixed(player) if player.index() < count => player,
            ParentSelection::Fixed(player) => {
                return Err(ValidationError::UnknownPlayer { player }.into());
            }
        };

        let ledger = ChipLedger::initialize(&self.names, config.starting_chips);
        info!(
            players = count,
            starting_chips = config.starting_chips,
            prompts = prompts.len(),
            %parent,
            "session initialized"
        );

        Ok(GameSession::new(
            config,
            ledger,
            prompts,
            rng.for_context("board"),
            parent,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::{CategorySelection, QuestionBank};

    fn bank(n: usize) -> QuestionBank {
        let mut bank = QuestionBank::new();
        bank.add_category("misc", "Misc", (0..n).map(|i| format!("Q{i}")));
        bank
    }

    fn lobby(names: &[&str]) -> Lobby {
        let mut lobby = Lobby::new();
        for name in names {
            lobby.add_player(name).unwrap();
        }
        lobby
    }

    #[test]
    fn test_add_player_trims_and_rejects_empty() {
        let mut lobby = Lobby::new();

        assert_eq!(lobby.add_player("  Ann "), Ok(PlayerId::new(0)));
        assert_eq!(lobby.add_player("   "), Err(ValidationError::EmptyPlayerName));
        assert_eq!(lobby.add_default_player(), Ok(PlayerId::new(1)));
        assert_eq!(lobby.players(), &["Ann".to_string(), "Player 2".to_string()]);
    }

    #[test]
    fn test_start_requires_two_players() {
        let err = lobby(&["Solo"])
            .start(SessionConfig::default(), &bank(15))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::Validation(ValidationError::TooFewPlayers { count: 1, min: 2 })
        );
    }

    #[test]
    fn test_start_requires_content() {
        let err = lobby(&["A", "B"])
            .start(SessionConfig::default(), &bank(14))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::Validation(ValidationError::InsufficientContent {
                available: 14,
                required: 15
            })
        );
    }

    #[test]
    fn test_start_requires_positive_chips() {
        let config = SessionConfig::default().with_starting_chips(0);
        let err = lobby(&["A", "B"]).start(config, &bank(15)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_start_bounds_starting_chips() {
        let config = SessionConfig::default().with_starting_chips(MAX_STARTING_CHIPS + 1);
        let err = lobby(&["A", "B"]).start(config, &bank(15)).unwrap_err();
        assert_eq!(
            err,
            GameError::Validation(ValidationError::InvalidStartingChips {
                chips: MAX_STARTING_CHIPS + 1,
                max: MAX_STARTING_CHIPS,
            })
        );

        let config = SessionConfig::default().with_starting_chips(MAX_STARTING_CHIPS);
        assert!(lobby(&["A", "B"]).start(config, &bank(15)).is_ok());
    }

    #[test]
    fn test_start_rejects_unseated_parent() {
        let config = SessionConfig::default().with_initial_parent(PlayerId::new(2));
        let err = lobby(&["A", "B"]).start(config, &bank(15)).unwrap_err();
        assert_eq!(
            err,
            GameError::Validation(ValidationError::UnknownPlayer {
                player: PlayerId::new(2)
            })
        );
    }

    #[test]
    fn test_unknown_category_uses_all() {
        let config = SessionConfig::default().with_category(CategorySelection::key("nope"));
        assert!(lobby(&["A", "B"]).start(config, &bank(15)).is_ok());
    }

    #[test]
    fn test_random_parent_is_seeded() {
        let names = ["A", "B", "C", "D", "E"];
        let config = SessionConfig::default().with_seed(99);

        let first = lobby(&names).start(config.clone(), &bank(15)).unwrap();
        let second = lobby(&names).start(config, &bank(15)).unwrap();

        assert_eq!(first.parent(), second.parent());
        assert!(first.parent().index() < names.len());
    }

    #[test]
    fn test_start_opens_accounts() {
        let config = SessionConfig::default().with_starting_chips(50);
        let session = lobby(&["A", "B", "C"]).start(config, &bank(15)).unwrap();

        assert_eq!(session.player_count(), 3);
        for (_, account) in session.ledger().accounts() {
            assert_eq!(account.chips(), 50);
            assert_eq!(account.history().count(), 1);
        }
    }
}
