//! # rust-backgammon
//!
//! Click-driven move resolution for a backgammon rules engine.
//!
//! ## Design Principles
//!
//! 1. **Engine speaks in turns, players click in steps**: The rules engine
//!    returns every complete way to spend a roll. The controller accepts one
//!    origin/destination pair at a time and matches it against those options.
//!
//! 2. **Engine owns the game**: Board, dice and turn order live behind the
//!    `RulesEngine` trait. The controller owns only selection, spent dice,
//!    the turn's cached options and the steps applied this turn.
//!
//! 3. **Snapshot reads**: Capture detection reads the board through
//!    `BoardView` strictly before the step is applied.
//!
//! ## Modules
//!
//! - `core`: Points, players, dice, steps, board, RNG, configuration
//! - `rules`: RulesEngine trait for game implementations
//! - `controller`: Point addressing, selection, legality filter, die ledger,
//!   turn advancement
//! - `games`: Standard backgammon engine
//! - `error`: Rejections and engine/config errors

pub mod core;
pub mod error;
pub mod rules;
pub mod controller;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PointIndex, Position, Color, Direction, Player, PlayerId, PlayerMap,
    DieValue, Roll, DiceRng, Step, LegalOption, StepRecord,
    Board, BoardView, AppConfig, BoardGeometry, ControllerConfig, GameSetup, MatchPolicy,
};

pub use crate::error::{ConfigError, PassError, Rejection, StepError};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::controller::{
    ClickOutcome, MoveController, PointLayout, PointerPos, Selection, TurnOutcome,
    DieLedger, LegalityFilter, TurnAdvancer,
};

pub use crate::games::backgammon::{BackgammonGame, BackgammonGameBuilder};
