//! Rolled dice.
//!
//! A `Roll` is the ordered list of die values a turn may spend. An ordinary
//! roll has two values; doubles expand to four. Before the first roll of a
//! turn the roll is empty.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single die value (1..=6 for standard dice).
pub type DieValue = u8;

/// Faces on a standard die.
pub const DIE_FACES: DieValue = 6;

/// Die values backed by inline storage for up to four entries.
pub type DiceVec = SmallVec<[DieValue; 4]>;

/// The die values rolled for one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    values: DiceVec,
}

impl Roll {
    /// No dice rolled yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a roll from two dice, expanding doubles to four values.
    #[must_use]
    pub fn from_pair(first: DieValue, second: DieValue) -> Self {
        let mut values = DiceVec::new();
        if first == second {
            values.extend_from_slice(&[first; 4]);
        } else {
            values.extend_from_slice(&[first, second]);
        }
        Self { values }
    }

    /// Build a roll from explicit values, used as given.
    #[must_use]
    pub fn from_values(values: &[DieValue]) -> Self {
        Self {
            values: SmallVec::from_slice(values),
        }
    }

    /// The rolled values in order.
    #[must_use]
    pub fn values(&self) -> &[DieValue] {
        &self.values
    }

    /// Number of dice this turn may spend.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Has nothing been rolled?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Are all values the same (and more than one)?
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.values.len() > 1 && self.values.iter().all(|&v| v == self.values[0])
    }

    /// Multiset difference: rolled values minus `used`.
    ///
    /// Each used value removes one matching instance. A value rolled twice
    /// and used once still has one instance left.
    #[must_use]
    pub fn remaining(&self, used: &[DieValue]) -> DiceVec {
        let mut available = self.values.clone();
        for die in used {
            if let Some(pos) = available.iter().position(|v| v == die) {
                available.remove(pos);
            }
        }
        available
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.values.is_empty() {
            return write!(f, "not rolled");
        }
        let parts: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(", "))
    }
}
