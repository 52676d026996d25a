//! Backgammon game implementation.

use im::Vector;

use super::moves;
use crate::core::board::{Board, BoardView, PIECES_PER_PLAYER};
use crate::core::config::GameSetup;
use crate::core::dice::{DiceVec, Roll};
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::core::point::PointIndex;
use crate::core::rng::{DiceRng, DiceRngState};
use crate::core::step::{LegalOption, Step, StepRecord};
use crate::core::Color;
use crate::error::{ConfigError, StepError};
use crate::rules::{GameResult, RulesEngine};

/// Two-player backgammon engine.
#[derive(Clone, Debug)]
pub struct BackgammonGame {
    players: PlayerMap<Player>,
    board: Board,
    current: PlayerId,
    roll: Roll,
    /// Die values spent this turn.
    spent: DiceVec,
    rng: DiceRng,
    turn_number: u32,
    sequence: u32,
    history: Vector<StepRecord>,
}

/// Builder for creating a BackgammonGame.
#[derive(Clone, Debug, Default)]
pub struct BackgammonGameBuilder {
    setup: GameSetup,
    board: Option<Board>,
    rng: Option<DiceRngState>,
}

impl BackgammonGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a full setup (seed and seats).
    pub fn setup(mut self, setup: GameSetup) -> Self {
        self.setup = setup;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.setup.seed = seed;
        self
    }

    /// Start from a custom position instead of the opening layout.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Resume the dice from a snapshot taken with `BackgammonGame::rng_state`.
    /// Overrides the seed.
    pub fn rng_state(mut self, state: DiceRngState) -> Self {
        self.rng = Some(state);
        self
    }

    /// Build the game. The first seat is on move and no dice are rolled.
    pub fn build(self) -> Result<BackgammonGame, ConfigError> {
        let players = PlayerMap::from(self.setup.seated_players()?);
        let rng = match &self.rng {
            Some(state) => DiceRng::from_state(state),
            None => DiceRng::new(self.setup.seed),
        };

        Ok(BackgammonGame {
            players,
            board: self.board.unwrap_or_else(Board::standard),
            current: PlayerId::new(0),
            roll: Roll::empty(),
            spent: DiceVec::new(),
            rng,
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
        })
    }
}

impl BackgammonGame {
    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get a seated player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every step applied so far.
    #[must_use]
    pub fn history(&self) -> &Vector<StepRecord> {
        &self.history
    }

    /// Rolled values not yet spent this turn.
    #[must_use]
    pub fn unspent_dice(&self) -> DiceVec {
        self.roll.remaining(&self.spent)
    }

    /// Pips `id` needs to bear everything off.
    #[must_use]
    pub fn pip_count(&self, id: PlayerId) -> u32 {
        moves::pip_count(&self.board, &self.players[id])
    }

    /// Dice RNG position, for resuming a game with identical future rolls.
    #[must_use]
    pub fn rng_state(&self) -> DiceRngState {
        self.rng.state()
    }

    /// Replace the current roll. Used to replay recorded games and in tests.
    pub fn set_roll(&mut self, roll: Roll) {
        self.roll = roll;
        self.spent.clear();
    }

    fn player_for(&self, color: Color) -> Option<&Player> {
        self.players.iter().map(|(_, p)| p).find(|p| p.color == color)
    }
}

impl BoardView for BackgammonGame {
    fn piece_owner(&self, point: PointIndex) -> Option<Color> {
        self.board.piece_owner(point)
    }

    fn piece_count(&self, point: PointIndex) -> u8 {
        self.board.piece_count(point)
    }
}

impl RulesEngine for BackgammonGame {
    fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    fn rolled_dice(&self) -> &Roll {
        &self.roll
    }

    fn apply_step(&mut self, player: &Player, step: &Step) -> Result<(), StepError> {
        if player.id != self.current {
            return Err(StepError::WrongPlayer {
                expected: self.current,
                got: player.id,
            });
        }
        if self.roll.is_empty() {
            return Err(StepError::NotRolled);
        }
        if !self.unspent_dice().contains(&step.die) {
            return Err(StepError::DieNotAvailable { die: step.die });
        }

        let mover = self.players[self.current].clone();
        let checked = moves::validate(&self.board, &mover, step)?;
        moves::apply(&mut self.board, &mover, &checked);

        self.spent.push(checked.die);
        self.history.push_back(StepRecord::new(
            mover.id,
            checked,
            self.turn_number,
            self.sequence,
        ));
        self.sequence += 1;
        Ok(())
    }

    fn enumerate_legal_options(&self, player: &Player, roll: &Roll) -> Vec<LegalOption> {
        moves::enumerate(&self.board, player, roll)
    }

    fn advance_turn(&mut self) {
        self.current = self.current.other();
        self.roll = Roll::empty();
        self.spent.clear();
        self.turn_number += 1;
        self.sequence = 0;
    }

    fn roll_dice(&mut self) {
        self.roll = self.rng.roll();
        self.spent.clear();
    }

    fn is_terminal(&self) -> Option<GameResult> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&color| self.board.borne_off(color) >= PIECES_PER_PLAYER)
            .and_then(|color| self.player_for(color))
            .map(|player| GameResult::Winner(player.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::point::Position;

    fn p(index: u8) -> PointIndex {
        PointIndex::new(index).unwrap()
    }

    fn s(origin: i8, destination: i8, die: u8) -> Step {
        Step::new(Position(origin), Position(destination), die)
    }

    #[test]
    fn test_build_defaults() {
        let game = BackgammonGameBuilder::new().build().unwrap();

        assert_eq!(game.current_player().color, Color::White);
        assert!(game.rolled_dice().is_empty());
        assert_eq!(game.turn_number(), 1);
        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.pip_count(PlayerId::new(0)), 167);
    }

    #[test]
    fn test_build_rejects_bad_setup() {
        let mut setup = GameSetup::default();
        setup.players.pop();
        assert!(BackgammonGameBuilder::new().setup(setup).build().is_err());
    }

    #[test]
    fn test_roll_is_seeded() {
        let mut a = BackgammonGameBuilder::new().seed(5).build().unwrap();
        let mut b = BackgammonGameBuilder::new().seed(5).build().unwrap();

        a.roll_dice();
        b.roll_dice();
        assert_eq!(a.rolled_dice(), b.rolled_dice());
        assert!(!a.rolled_dice().is_empty());
    }

    #[test]
    fn test_apply_step_records_history() {
        let mut game = BackgammonGameBuilder::new().build().unwrap();
        game.set_roll(Roll::from_pair(3, 1));
        let white = game.current_player().clone();

        game.apply_step(&white, &s(16, 19, 3)).unwrap();

        assert_eq!(game.piece_count(p(19)), 1);
        assert_eq!(game.piece_count(p(16)), 2);
        assert_eq!(game.unspent_dice().as_slice(), &[1]);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].step, s(16, 19, 3));
    }

    #[test]
    fn test_apply_step_structural_checks() {
        let mut game = BackgammonGameBuilder::new().build().unwrap();
        let white = game.current_player().clone();
        let black = game.player(PlayerId::new(1)).unwrap().clone();

        assert_eq!(game.apply_step(&white, &s(16, 19, 3)), Err(StepError::NotRolled));

        game.set_roll(Roll::from_pair(3, 1));
        assert_eq!(
            game.apply_step(&black, &s(23, 20, 3)),
            Err(StepError::WrongPlayer {
                expected: PlayerId::new(0),
                got: PlayerId::new(1)
            })
        );
        assert_eq!(
            game.apply_step(&white, &s(16, 21, 5)),
            Err(StepError::DieNotAvailable { die: 5 })
        );

        game.apply_step(&white, &s(16, 19, 3)).unwrap();
        assert_eq!(
            game.apply_step(&white, &s(11, 14, 3)),
            Err(StepError::DieNotAvailable { die: 3 })
        );
    }

    #[test]
    fn test_apply_step_hit_sends_to_bar() {
        let mut board = Board::standard();
        board.place(p(3), Color::Black, 1);
        let mut game = BackgammonGameBuilder::new().board(board).build().unwrap();
        game.set_roll(Roll::from_pair(3, 4));
        let white = game.current_player().clone();

        game.apply_step(&white, &s(0, 3, 3)).unwrap();

        assert_eq!(game.board().bar_count(Color::Black), 1);
        assert!(game.history()[0].step.is_capture);
    }

    #[test]
    fn test_player_lookup() {
        let game = BackgammonGameBuilder::new().build().unwrap();

        assert_eq!(game.player(PlayerId::new(1)).map(|p| p.color), Some(Color::Black));
        assert!(game.player(PlayerId::new(2)).is_none());
    }

    #[test]
    fn test_resume_from_rng_state() {
        let mut game = BackgammonGameBuilder::new().seed(21).build().unwrap();
        for _ in 0..5 {
            game.roll_dice();
        }
        let state = game.rng_state();

        let mut resumed = BackgammonGameBuilder::new()
            .seed(999)
            .rng_state(state)
            .build()
            .unwrap();
        for _ in 0..10 {
            game.roll_dice();
            resumed.roll_dice();
            assert_eq!(game.rolled_dice(), resumed.rolled_dice());
        }
    }

    #[test]
    fn test_advance_turn() {
        let mut game = BackgammonGameBuilder::new().build().unwrap();
        game.roll_dice();
        game.advance_turn();

        assert_eq!(game.current_player().color, Color::Black);
        assert!(game.rolled_dice().is_empty());
        assert_eq!(game.turn_number(), 2);

        game.advance_turn();
        assert_eq!(game.current_player().color, Color::White);
    }

    #[test]
    fn test_enumerate_for_black() {
        let game = BackgammonGameBuilder::new().build().unwrap();
        let black = game.player(PlayerId::new(1)).unwrap().clone();
        let options = game.enumerate_legal_options(&black, &Roll::from_pair(3, 1));

        assert!(options.contains(&LegalOption::new(&[s(7, 4, 3), s(5, 4, 1)])));
    }

    #[test]
    fn test_is_terminal() {
        let mut board = Board::empty();
        for _ in 0..PIECES_PER_PLAYER {
            board.bear_off(Color::Black);
        }
        board.place(p(20), Color::White, 1);
        let game = BackgammonGameBuilder::new().board(board).build().unwrap();

        assert_eq!(game.is_terminal(), Some(GameResult::Winner(PlayerId::new(1))));
        assert_eq!(BackgammonGameBuilder::new().build().unwrap().is_terminal(), None);
    }
}
