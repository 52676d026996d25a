//! Legality filter: is a click-pair move consistent with the turn's options?
//!
//! ## Algorithm
//!
//! 1. Distance is `|origin - destination|`.
//! 2. Available dice are the rolled values minus the spent ones (multiset).
//! 3. No available die equal to the distance: `NoMatchingDie`. This is
//!    checked before option membership.
//! 4. No option contains the move (per `MatchPolicy`): `NotInLegalSet`.
//! 5. Capture is read from the board snapshot, not from the option.
//!
//! Under `MatchPolicy::AnyOption` a step is matched against every option
//! independently of what was already played, so a locally legal step can
//! leave the remaining dice with no completion.

use crate::core::board::BoardView;
use crate::core::config::MatchPolicy;
use crate::core::dice::{DieValue, Roll};
use crate::core::player::Color;
use crate::core::point::{PointIndex, Position};
use crate::core::step::{LegalOption, Step};
use crate::error::Rejection;

/// Read-only view of the turn the filter evaluates against.
#[derive(Clone, Copy, Debug)]
pub struct TurnSnapshot<'a> {
    /// Options enumerated at turn start. Never mutated during the turn.
    pub options: &'a [LegalOption],
    /// Steps already applied this turn, in order.
    pub applied: &'a [Step],
    pub rolled: &'a Roll,
    pub used: &'a [DieValue],
}

/// Stateless step validator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegalityFilter {
    policy: MatchPolicy,
}

impl LegalityFilter {
    #[must_use]
    pub const fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Validate `origin -> destination` for `mover` and build the step.
    ///
    /// `board` must reflect the position before this step is applied.
    pub fn evaluate<B: BoardView + ?Sized>(
        &self,
        origin: PointIndex,
        destination: PointIndex,
        turn: &TurnSnapshot<'_>,
        board: &B,
        mover: Color,
    ) -> Result<Step, Rejection> {
        let from = Position::from(origin);
        let to = Position::from(destination);
        let distance = from.distance(to);

        let available = turn.rolled.remaining(turn.used);
        if !available.contains(&distance) {
            return Err(Rejection::NoMatchingDie {
                distance,
                available: available.to_vec(),
            });
        }

        if !self.is_listed(turn, from, to) {
            return Err(Rejection::NotInLegalSet {
                origin,
                destination,
            });
        }

        let mut step = Step::new(from, to, distance);
        step.is_capture = board.is_blot_against(destination, mover);
        Ok(step)
    }

    fn is_listed(&self, turn: &TurnSnapshot<'_>, from: Position, to: Position) -> bool {
        match self.policy {
            MatchPolicy::AnyOption => turn.options.iter().any(|o| o.contains_move(from, to)),
            MatchPolicy::Committed => turn
                .options
                .iter()
                .any(|o| o.extends_prefix(turn.applied, from, to)),
        }
    }
}
