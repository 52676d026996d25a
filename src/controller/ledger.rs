//! Die ledger: which rolled values have been spent this turn.

use crate::core::dice::{DiceVec, DieValue, Roll};

/// Multiset of die values spent by applied steps.
///
/// Grows by one per applied step, cleared once per turn advance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DieLedger {
    used: DiceVec,
}

impl DieLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one spent die. Only called after the filter accepted a step.
    pub fn record_use(&mut self, die: DieValue) {
        self.used.push(die);
    }

    /// Forget every recorded use.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    /// Have as many dice been spent as were rolled?
    #[must_use]
    pub fn is_exhausted(&self, rolled: &Roll) -> bool {
        self.used.len() >= rolled.len()
    }

    /// Spent values in the order they were used.
    #[must_use]
    pub fn used(&self) -> &[DieValue] {
        &self.used
    }

    /// Number of recorded uses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Rolled values not yet spent.
    #[must_use]
    pub fn available(&self, rolled: &Roll) -> DiceVec {
        rolled.remaining(&self.used)
    }
}
