//! Rules engine trait for game implementations.
//!
//! Implementations define:
//! - Legal whole-turn move sequences for a roll
//! - How a single step modifies the board
//! - Turn order, dice and win detection
//!
//! The interactive controller calls into `RulesEngine` but never
//! decides legality on its own beyond matching against the options.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
