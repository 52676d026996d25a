//! Scripted rules engine shared by the integration tests.
//!
//! Legal options and rolls are supplied by the test instead of being
//! computed, so the controller can be exercised against exact scenarios.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use rust_backgammon::controller::{ClickOutcome, MoveController};
use rust_backgammon::core::{
    Board, BoardView, Color, LegalOption, Player, PlayerConfig, PointIndex, Position, Roll, Step,
};
use rust_backgammon::error::StepError;
use rust_backgammon::rules::{GameResult, RulesEngine};

/// Engine calls, in the order they were made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    AdvanceTurn,
    RollDice,
    Enumerate,
    ApplyStep,
}

pub struct ScriptedEngine {
    pub board: Board,
    pub players: [Player; 2],
    pub current: usize,
    pub roll: Roll,
    /// Rolls handed out by `roll_dice`, front first. Empty queue rolls (1, 2).
    pub rolls: VecDeque<Roll>,
    /// Options for the current turn.
    pub options: Vec<LegalOption>,
    /// Options installed on each `advance_turn`, front first.
    pub next_options: VecDeque<Vec<LegalOption>>,
    /// Refuse the next `apply_step` with this error.
    pub refuse_next: Option<StepError>,
    pub applied: Vec<Step>,
    pub calls: RefCell<Vec<Call>>,
}

impl ScriptedEngine {
    pub fn new(board: Board, roll: Roll, options: Vec<LegalOption>) -> Self {
        Self {
            board,
            players: [
                PlayerConfig::white().to_player().unwrap(),
                PlayerConfig::black().to_player().unwrap(),
            ],
            current: 0,
            roll,
            rolls: VecDeque::new(),
            options,
            next_options: VecDeque::new(),
            refuse_next: None,
            applied: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl BoardView for ScriptedEngine {
    fn piece_owner(&self, point: PointIndex) -> Option<Color> {
        self.board.piece_owner(point)
    }

    fn piece_count(&self, point: PointIndex) -> u8 {
        self.board.piece_count(point)
    }
}

impl RulesEngine for ScriptedEngine {
    fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    fn rolled_dice(&self) -> &Roll {
        &self.roll
    }

    fn apply_step(&mut self, player: &Player, step: &Step) -> Result<(), StepError> {
        self.calls.borrow_mut().push(Call::ApplyStep);
        if let Some(err) = self.refuse_next.take() {
            return Err(err);
        }
        if let Some(point) = step.origin.point() {
            self.board.lift(point);
        }
        if let Some(point) = step.destination.point() {
            self.board.drop_piece(point, player.color);
        }
        self.applied.push(*step);
        Ok(())
    }

    fn enumerate_legal_options(&self, _player: &Player, _roll: &Roll) -> Vec<LegalOption> {
        self.calls.borrow_mut().push(Call::Enumerate);
        self.options.clone()
    }

    fn advance_turn(&mut self) {
        self.calls.borrow_mut().push(Call::AdvanceTurn);
        self.current = 1 - self.current;
        self.roll = Roll::empty();
        if let Some(options) = self.next_options.pop_front() {
            self.options = options;
        }
    }

    fn roll_dice(&mut self) {
        self.calls.borrow_mut().push(Call::RollDice);
        self.roll = self.rolls.pop_front().unwrap_or_else(|| Roll::from_pair(1, 2));
    }

    fn is_terminal(&self) -> Option<GameResult> {
        None
    }
}

pub fn p(index: u8) -> PointIndex {
    PointIndex::new(index).unwrap()
}

pub fn s(origin: i8, destination: i8, die: u8) -> Step {
    Step::new(Position(origin), Position(destination), die)
}

pub fn option(steps: &[Step]) -> LegalOption {
    LegalOption::new(steps)
}

/// Click the center of a point's hit region.
pub fn click<E: RulesEngine>(controller: &mut MoveController, engine: &mut E, point: u8) -> ClickOutcome {
    let pos = controller.layout().region(p(point)).center();
    controller.handle_pointer_down(engine, pos)
}

/// Click inside the frame, outside every point.
pub fn click_off_board<E: RulesEngine>(controller: &mut MoveController, engine: &mut E) -> ClickOutcome {
    controller.handle_pointer_down(engine, (5.0, 5.0).into())
}

/// Select `origin` then click `destination`, returning the second outcome.
pub fn play<E: RulesEngine>(
    controller: &mut MoveController,
    engine: &mut E,
    origin: u8,
    destination: u8,
) -> ClickOutcome {
    let first = click(controller, engine, origin);
    assert_eq!(first, ClickOutcome::Selected(p(origin)), "could not select {origin}");
    click(controller, engine, destination)
}

/// White pieces at the given points, two each.
pub fn white_board(points: &[u8]) -> Board {
    let mut board = Board::empty();
    for &index in points {
        board.place(p(index), Color::White, 2);
    }
    board
}
