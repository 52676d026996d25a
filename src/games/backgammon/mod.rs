//! Standard two-player backgammon.
//!
//! - 15 pieces each, opening layout per `Board::standard`
//! - Pieces on the bar must enter before anything else moves
//! - Two or more opposing pieces close a point; a single one is hit
//! - Bearing off once every piece is home, oversized dice allowed only for
//!   the furthest piece
//! - Each turn must use as many dice as possible, the larger die if only one
//! - First to bear off all 15 wins

mod game;
mod moves;

pub use game::{BackgammonGame, BackgammonGameBuilder};
