//! End-to-end tests: MoveController driving the standard backgammon engine.

mod common;

use common::{click, p, play, s};
use rust_backgammon::controller::{ClickOutcome, MoveController, TurnOutcome};
use rust_backgammon::core::{AppConfig, Board, BoardView, Color, MatchPolicy, PlayerId, Roll};
use rust_backgammon::games::backgammon::{BackgammonGame, BackgammonGameBuilder};
use rust_backgammon::rules::RulesEngine;

fn opening(roll: Roll) -> (BackgammonGame, MoveController) {
    let mut game = BackgammonGameBuilder::new().seed(11).build().unwrap();
    game.set_roll(roll);
    let mut controller = MoveController::default();
    controller.begin_turn(&mut game);
    (game, controller)
}

// =============================================================================
// Opening turns
// =============================================================================

/// Test playing the (3, 1) opening point by clicks.
#[test]
fn test_opening_three_one() {
    let (mut game, mut controller) = opening(Roll::from_pair(3, 1));
    assert!(controller.has_legal_moves());

    let outcome = play(&mut controller, &mut game, 16, 19);
    assert_eq!(
        outcome,
        ClickOutcome::Moved {
            step: s(16, 19, 3),
            turn: TurnOutcome::Continue
        }
    );

    let outcome = play(&mut controller, &mut game, 18, 19);
    assert_eq!(
        outcome,
        ClickOutcome::Moved {
            step: s(18, 19, 1),
            turn: TurnOutcome::Advance
        }
    );

    assert_eq!(game.board().stack(p(19)).count, 2);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current_player().color, Color::Black);
    assert_eq!(game.turn_number(), 2);
    assert!(!game.rolled_dice().is_empty());
    assert!(controller.used_dice().is_empty());
}

/// Test that black's pieces are selectable only on black's turn.
#[test]
fn test_black_pieces_wait_their_turn() {
    let (mut game, mut controller) = opening(Roll::from_pair(6, 5));

    assert_eq!(click(&mut controller, &mut game, 23), ClickOutcome::Ignored);
    assert_eq!(click(&mut controller, &mut game, 0), ClickOutcome::Selected(p(0)));
}

/// Test that a hit through the controller puts the piece on the bar.
#[test]
fn test_hit_through_controller() {
    let mut board = Board::empty();
    board.place(p(0), Color::White, 2);
    board.place(p(3), Color::Black, 1);
    board.place(p(20), Color::Black, 14);
    let mut game = BackgammonGameBuilder::new().board(board).build().unwrap();
    game.set_roll(Roll::from_pair(3, 4));
    let mut controller = MoveController::default();
    controller.begin_turn(&mut game);

    let outcome = play(&mut controller, &mut game, 0, 3);

    match outcome {
        ClickOutcome::Moved { step, turn } => {
            assert!(step.is_capture);
            assert_eq!(turn, TurnOutcome::Continue);
        }
        other => panic!("expected a move, got {other:?}"),
    }
    assert_eq!(game.board().bar_count(Color::Black), 1);
    assert!(game.is_owned_by(p(3), Color::White));
}

/// Test that a blocked destination is refused before reaching the engine.
#[test]
fn test_blocked_point_refused() {
    let (mut game, mut controller) = opening(Roll::from_pair(5, 2));

    // Black holds point 5 with five pieces.
    let outcome = play(&mut controller, &mut game, 0, 5);

    assert!(matches!(outcome, ClickOutcome::Rejected(_)));
    assert!(game.history().is_empty());
    assert_eq!(game.unspent_dice().as_slice(), &[5, 2]);
}

// =============================================================================
// Whole games
// =============================================================================

/// Test many turns of clicking through engine-listed options.
#[test]
fn test_click_through_turns() {
    let mut game = BackgammonGameBuilder::new().seed(7).build().unwrap();
    let mut controller = MoveController::default();
    controller.begin_turn(&mut game);
    let mut turns = 0;

    for _ in 0..40 {
        if game.is_terminal().is_some() {
            break;
        }
        if !controller.has_legal_moves() {
            controller.pass_turn(&mut game).unwrap();
            turns += 1;
            continue;
        }

        // Bar entry and bearing off have no clickable point.
        let Some(chosen) = controller
            .legal_options()
            .iter()
            .find(|o| {
                o.steps
                    .iter()
                    .all(|step| step.origin.point().is_some() && step.destination.point().is_some())
            })
            .cloned()
        else {
            if controller.pass_turn(&mut game).is_err() {
                break;
            }
            turns += 1;
            continue;
        };

        let mover = game.current_player().id;
        let last = chosen.len() - 1;
        for (i, step) in chosen.steps.iter().enumerate() {
            let (Some(from), Some(to)) = (step.origin.point(), step.destination.point()) else {
                unreachable!();
            };
            let outcome = play(&mut controller, &mut game, from.index() as u8, to.index() as u8);
            let expected = if i == last {
                TurnOutcome::Advance
            } else {
                TurnOutcome::Continue
            };
            assert!(
                matches!(outcome, ClickOutcome::Moved { turn, .. } if turn == expected),
                "step {step} of {chosen} gave {outcome:?}"
            );
        }
        assert_ne!(game.current_player().id, mover);
        turns += 1;
    }

    assert!(turns >= 1);
    assert_eq!(game.board().total_pieces(Color::White), 15);
    assert_eq!(game.board().total_pieces(Color::Black), 15);
}

/// Test that a player stuck on the bar can pass despite listed entries.
#[test]
fn test_bar_entry_turn_can_pass() {
    let mut board = Board::standard();
    board.lift(p(0));
    board.set_bar(Color::White, 1);
    let mut game = BackgammonGameBuilder::new().board(board).build().unwrap();
    game.set_roll(Roll::from_pair(3, 1));
    let mut controller = MoveController::default();
    controller.begin_turn(&mut game);

    assert!(controller.has_legal_moves());
    assert!(controller
        .legal_options()
        .iter()
        .all(|o| o.steps[0].origin.point().is_none()));
    assert!(controller.can_pass(&game));

    controller.pass_turn(&mut game).unwrap();
    assert_eq!(game.current_player().color, Color::Black);
    assert_eq!(game.board().bar_count(Color::White), 1);
}

/// Test a session built from TOML configuration.
#[test]
fn test_configured_session() {
    let config = AppConfig::from_toml_str(
        r#"
        [game]
        seed = 3

        [controller]
        match_policy = "committed"
        "#,
    )
    .unwrap();

    let mut game = BackgammonGameBuilder::new()
        .setup(config.game.clone())
        .build()
        .unwrap();
    let mut controller = MoveController::new(config.controller.clone());
    assert_eq!(controller.match_policy(), MatchPolicy::Committed);

    game.set_roll(Roll::from_pair(3, 1));
    controller.begin_turn(&mut game);
    assert_eq!(game.current_player().id, PlayerId::new(0));

    let outcome = play(&mut controller, &mut game, 16, 19);
    assert!(matches!(outcome, ClickOutcome::Moved { .. }));
}
