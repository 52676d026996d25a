//! Rules engine trait for backgammon implementations.
//!
//! The engine owns the board, the dice and the turn order. It answers in
//! whole turns: `enumerate_legal_options` returns every complete way to
//! spend the current roll. The interactive controller consumes those
//! options one step at a time and calls back into the engine to mutate.

use crate::core::board::BoardView;
use crate::core::dice::Roll;
use crate::core::player::{Player, PlayerId};
use crate::core::step::{LegalOption, Step};
use crate::error::StepError;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// Rules engine trait.
///
/// All calls are synchronous and exclusive: one mutation in flight at a time.
///
/// ## Implementation Notes
///
/// - `rolled_dice`: Empty before the roll of the current turn
/// - `apply_step`: Must refuse structurally invalid steps without mutating
/// - `enumerate_legal_options`: Empty if the player cannot move at all
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine: BoardView {
    /// The player on move.
    fn current_player(&self) -> &Player;

    /// Dice rolled for the current turn.
    fn rolled_dice(&self) -> &Roll;

    /// Apply one step to the board.
    fn apply_step(&mut self, player: &Player, step: &Step) -> Result<(), StepError>;

    /// Every complete, legal way for `player` to spend `roll`.
    fn enumerate_legal_options(&self, player: &Player, roll: &Roll) -> Vec<LegalOption>;

    /// Hand the move to the next player.
    fn advance_turn(&mut self);

    /// Roll dice for the current turn.
    fn roll_dice(&mut self);

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;
}
