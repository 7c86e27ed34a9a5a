//! Round lifecycle and phase enforcement.

use ladder_party::{
    Choice, Command, GameError, GameSession, Lobby, Phase, PlayerId, QuestionBank, SessionConfig,
    SessionEvent, StateError, LADDER_LEVELS,
};

fn bank() -> QuestionBank {
    let mut bank = QuestionBank::new();
    bank.add_category("misc", "Misc", (0..15).map(|i| format!("Question {i}?")));
    bank
}

fn session(players: usize, parent: u8) -> GameSession {
    let mut lobby = Lobby::new();
    for _ in 0..players {
        lobby.add_default_player().unwrap();
    }
    let config = SessionConfig::default().with_initial_parent(PlayerId::new(parent));
    lobby.start(config, &bank()).unwrap()
}

/// Test that a new session idles until the first round is requested.
#[test]
fn test_session_waits_for_first_round() {
    let session = session(3, 0);

    assert_eq!(session.phase(), Phase::AwaitingRound);
    assert_eq!(session.round_number(), 1);
    assert!(session.board().is_none());
    assert_eq!(session.active_bettor(), None);
}

/// Test that starting a round deals a board and hands the turn to the first bettor.
#[test]
fn test_start_round_events() {
    let mut session = session(4, 2);

    let events = session.start_round().unwrap();

    assert_eq!(
        events,
        vec![
            SessionEvent::RoundStarted {
                round: 1,
                parent: PlayerId::new(2)
            },
            SessionEvent::BettorUp {
                player: PlayerId::new(0)
            },
        ]
    );
    assert_eq!(session.phase(), Phase::Betting);
    assert_eq!(session.board().unwrap().cards().len(), 15);
}

/// Test that bettors are asked in seat order with the parent skipped.
#[test]
fn test_betting_order_skips_parent() {
    let mut session = session(4, 1);
    session.start_round().unwrap();

    let mut order = Vec::new();
    while let Some(player) = session.active_bettor() {
        order.push(player);
        session.submit_bet(player, 0, 1).unwrap();
    }

    assert_eq!(
        order,
        vec![PlayerId::new(0), PlayerId::new(2), PlayerId::new(3)]
    );
    assert_eq!(session.phase(), Phase::ParentTurn);
}

/// Test that the final bet closes betting and starts the parent's turn.
#[test]
fn test_last_bet_closes_betting() {
    let mut session = session(2, 0);
    session.start_round().unwrap();

    let events = session.submit_bet(PlayerId::new(1), 3, 25).unwrap();

    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        SessionEvent::BetPlaced { balance: 75, .. }
    ));
    assert_eq!(events[1], SessionEvent::BettingClosed);
}

/// Test that commands for another phase are rejected without side effects.
#[test]
fn test_wrong_phase_commands_rejected() {
    let mut session = session(2, 0);

    // Before any round.
    assert_eq!(
        session.submit_bet(PlayerId::new(1), 0, 10),
        Err(GameError::State(StateError::BettingClosed))
    );
    assert_eq!(
        session.submit_parent_choice(Choice::Yes),
        Err(GameError::State(StateError::NotParentTurn))
    );

    // During betting.
    session.start_round().unwrap();
    assert_eq!(
        session.submit_parent_choice(Choice::Yes),
        Err(GameError::State(StateError::NotParentTurn))
    );
    assert_eq!(
        session.start_round(),
        Err(GameError::State(StateError::RoundInProgress))
    );

    // During the parent's turn.
    session.submit_bet(PlayerId::new(1), 0, 10).unwrap();
    assert_eq!(
        session.submit_bet(PlayerId::new(1), 0, 10),
        Err(GameError::State(StateError::BettingClosed))
    );
    assert_eq!(
        session.start_round(),
        Err(GameError::State(StateError::RoundInProgress))
    );
    assert_eq!(session.balance(PlayerId::new(1)), Ok(90));
}

/// Test that a bet from the wrong seat leaves the queue untouched.
#[test]
fn test_out_of_turn_bet_rejected() {
    let mut session = session(3, 0);
    session.start_round().unwrap();

    let err = session.submit_bet(PlayerId::new(2), 0, 10).unwrap_err();

    assert!(err.is_state());
    assert_eq!(session.active_bettor(), Some(PlayerId::new(1)));
    assert_eq!(session.balance(PlayerId::new(2)), Ok(100));
}

/// Test that the round settles on the fifth parent choice.
#[test]
fn test_round_ends_after_five_choices() {
    let mut session = session(2, 0);
    session.start_round().unwrap();
    session.submit_bet(PlayerId::new(1), 0, 10).unwrap();

    for step in 0..LADDER_LEVELS - 1 {
        let events = session.submit_parent_choice(Choice::Yes).unwrap();
        assert_eq!(
            events,
            vec![SessionEvent::LadderAdvanced {
                level: step + 1,
                slot: 0
            }]
        );
        assert_eq!(session.phase(), Phase::ParentTurn);
    }

    let events = session.submit_parent_choice(Choice::Yes).unwrap();
    assert!(matches!(events[0], SessionEvent::RoundSettled(_)));
    assert_eq!(
        events[1],
        SessionEvent::NextParent {
            player: PlayerId::new(1)
        }
    );
    assert_eq!(session.phase(), Phase::AwaitingRound);

    // The next round only starts on request.
    assert_eq!(
        session.submit_parent_choice(Choice::Yes),
        Err(GameError::State(StateError::NotParentTurn))
    );
    assert_eq!(session.round_number(), 2);
}

/// Test that the active prompt tracks the parent's ladder position.
#[test]
fn test_active_prompt_follows_ladder() {
    let mut session = session(2, 0);
    session.start_round().unwrap();
    assert_eq!(session.active_prompt(), None);

    session.submit_bet(PlayerId::new(1), 0, 10).unwrap();
    let board = session.board().unwrap().clone();
    assert_eq!(session.active_prompt(), board.prompt_at(0, 0));

    session.submit_parent_choice(Choice::No).unwrap();
    assert_eq!(session.active_prompt(), board.prompt_at(1, 1));
}

/// Test that every round deals a fresh board.
#[test]
fn test_each_round_deals_a_new_board() {
    let mut session = session(2, 0);

    session.start_round().unwrap();
    let first = session.board().unwrap().clone();
    session.submit_bet(PlayerId::new(1), 0, 10).unwrap();
    for _ in 0..LADDER_LEVELS {
        session.submit_parent_choice(Choice::No).unwrap();
    }

    session.start_round().unwrap();
    let second = session.board().unwrap().clone();
    assert_ne!(first, second);
}

/// Test filtering the round's bets by goal slot.
#[test]
fn test_bets_on_slot() {
    let mut session = session(4, 0);
    session.apply(Command::StartRound).unwrap();
    for (player, slot) in [(1, 2), (2, 5), (3, 2)] {
        session
            .apply(Command::SubmitBet {
                player: PlayerId::new(player),
                goal_slot: slot,
                amount: 5,
            })
            .unwrap();
    }

    let on_two: Vec<_> = session.bets_on(2).iter().map(|b| b.player).collect();
    assert_eq!(on_two, vec![PlayerId::new(1), PlayerId::new(3)]);
    assert!(session.bets_on(0).is_empty());
}

/// Test routing boolean parent choices through `Command`.
#[test]
fn test_command_parent_choice_from_bool() {
    let mut session = session(2, 0);
    session.apply(Command::StartRound).unwrap();
    session
        .apply(Command::SubmitBet {
            player: PlayerId::new(1),
            goal_slot: 1,
            amount: 10,
        })
        .unwrap();

    session.apply(Command::parent_choice(false)).unwrap();
    assert_eq!(session.ladder().slot(), 1);
    session.apply(Command::parent_choice(true)).unwrap();
    assert_eq!(session.ladder().slot(), 1);
    assert_eq!(session.ladder().level(), 2);
}
