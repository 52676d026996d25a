//! Core types: points, players, dice, steps, board, RNG, configuration.
//!
//! These are shared by the rules engine and the interactive controller.
//! Neither side owns the other's state; they meet on these types.

pub mod point;
pub mod player;
pub mod dice;
pub mod rng;
pub mod step;
pub mod board;
pub mod config;

pub use point::{PointIndex, Position, POINT_COUNT};
pub use player::{Color, Direction, Player, PlayerId, PlayerMap};
pub use dice::{DiceVec, DieValue, Roll, DIE_FACES};
pub use rng::{DiceRng, DiceRngState};
pub use step::{LegalOption, Step, StepRecord};
pub use board::{Board, BoardView, PointStack, PIECES_PER_PLAYER};
pub use config::{AppConfig, BoardGeometry, ControllerConfig, GameSetup, MatchPolicy, PlayerConfig};
