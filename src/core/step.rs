//! Step representation: one piece movement spending one die.
//!
//! The rules engine speaks in whole turns: a `LegalOption` is an ordered
//! sequence of steps that together spend the turn's dice. The interactive
//! layer builds and applies one `Step` at a time and matches each against
//! the steps contained in the options.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::dice::DieValue;
use super::player::PlayerId;
use super::point::Position;

/// A single origin -> destination movement.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Position, Step};
///
/// let step = Step::new(Position(0), Position(3), 3);
/// assert_eq!(step.distance(), 3);
/// assert!(!step.is_capture);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub origin: Position,
    pub destination: Position,
    /// Die value spent by this step.
    pub die: DieValue,
    /// Does this step hit an opposing blot?
    pub is_capture: bool,
}

impl Step {
    /// Create a non-capturing step.
    #[must_use]
    pub const fn new(origin: Position, destination: Position, die: DieValue) -> Self {
        Self {
            origin,
            destination,
            die,
            is_capture: false,
        }
    }

    /// Mark this step as a capture.
    #[must_use]
    pub const fn capturing(mut self) -> Self {
        self.is_capture = true;
        self
    }

    /// Pips between origin and destination.
    #[must_use]
    pub fn distance(&self) -> u8 {
        self.origin.distance(self.destination)
    }

    /// Do origin and destination match the given pair?
    #[must_use]
    pub fn connects(&self, origin: Position, destination: Position) -> bool {
        self.origin == origin && self.destination == destination
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} [{}]", self.origin.0, self.destination.0, self.die)?;
        if self.is_capture {
            write!(f, "*")?;
        }
        Ok(())
    }
}

/// One complete, engine-validated way to spend a turn's dice.
///
/// Immutable for the lifetime of a turn. Consumption is tracked elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalOption {
    /// Steps in play order. Four covers doubles without heap allocation.
    pub steps: SmallVec<[Step; 4]>,
}

impl LegalOption {
    /// Create an option from steps in order.
    #[must_use]
    pub fn new(steps: &[Step]) -> Self {
        Self {
            steps: SmallVec::from_slice(steps),
        }
    }

    /// Number of steps (dice spent).
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Does this option spend no dice?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Does any step of this option connect `origin` to `destination`?
    #[must_use]
    pub fn contains_move(&self, origin: Position, destination: Position) -> bool {
        self.steps.iter().any(|s| s.connects(origin, destination))
    }

    /// Do the moves in `applied`, followed by `origin -> destination`,
    /// form a prefix of this option?
    #[must_use]
    pub fn extends_prefix(&self, applied: &[Step], origin: Position, destination: Position) -> bool {
        if applied.len() >= self.steps.len() {
            return false;
        }
        let prefix_matches = applied
            .iter()
            .zip(self.steps.iter())
            .all(|(done, planned)| planned.connects(done.origin, done.destination));
        prefix_matches && self.steps[applied.len()].connects(origin, destination)
    }
}

impl std::fmt::Display for LegalOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.steps.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// An applied step with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The step applied.
    pub step: Step,

    /// Turn number when the step was applied.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl StepRecord {
    /// Create a new step record.
    #[must_use]
    pub fn new(player: PlayerId, step: Step, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            step,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(origin: i8, destination: i8, die: DieValue) -> Step {
        Step::new(Position(origin), Position(destination), die)
    }

    #[test]
    fn test_step_basics() {
        let s = step(3, 8, 5);
        assert_eq!(s.distance(), 5);
        assert!(s.connects(Position(3), Position(8)));
        assert!(!s.connects(Position(8), Position(3)));
        assert_eq!(format!("{}", s), "3 -> 8 [5]");
        assert_eq!(format!("{}", s.capturing()), "3 -> 8 [5]*");
    }

    #[test]
    fn test_option_contains_move() {
        let option = LegalOption::new(&[step(0, 3, 3), step(3, 8, 5)]);

        assert_eq!(option.len(), 2);
        assert!(option.contains_move(Position(0), Position(3)));
        assert!(option.contains_move(Position(3), Position(8)));
        assert!(!option.contains_move(Position(0), Position(8)));
    }

    #[test]
    fn test_option_extends_prefix() {
        let option = LegalOption::new(&[step(0, 3, 3), step(3, 8, 5)]);

        assert!(option.extends_prefix(&[], Position(0), Position(3)));
        assert!(!option.extends_prefix(&[], Position(3), Position(8)));
        assert!(option.extends_prefix(&[step(0, 3, 3)], Position(3), Position(8)));
        assert!(!option.extends_prefix(&[step(12, 15, 3)], Position(3), Position(8)));
        assert!(!option.extends_prefix(
            &[step(0, 3, 3), step(3, 8, 5)],
            Position(8),
            Position(11)
        ));
    }

    #[test]
    fn test_option_equality_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |o: &LegalOption| {
            let mut h = DefaultHasher::new();
            o.hash(&mut h);
            h.finish()
        };

        let a = LegalOption::new(&[step(0, 3, 3), step(3, 8, 5)]);
        let b = LegalOption::new(&[step(0, 3, 3), step(3, 8, 5)]);
        let c = LegalOption::new(&[step(0, 5, 5), step(5, 8, 3)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn test_step_record_serialization() {
        let record = StepRecord::new(PlayerId::new(1), step(12, 7, 5).capturing(), 2, 1);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: StepRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
