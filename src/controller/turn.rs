//! Turn advancement: decide when the turn is over and hand it back.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::ledger::DieLedger;
use crate::core::dice::Roll;
use crate::core::step::LegalOption;
use crate::rules::RulesEngine;

/// Result of applying a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Dice remain; keep matching against the same options.
    Continue,
    /// The turn is complete and has been handed to the next player.
    Advance,
}

/// Tracks how many steps finish the current turn.
///
/// Normally that is the number of rolled dice. When the rules only allow
/// part of the roll to be played, the longest legal option is shorter than
/// the roll and the turn ends after that many steps instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnAdvancer {
    step_limit: usize,
}

impl TurnAdvancer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the step limit for a fresh turn.
    pub fn prepare(&mut self, options: &[LegalOption], rolled: &Roll) {
        let longest = options.iter().map(LegalOption::len).max().unwrap_or(0);
        self.step_limit = longest.min(rolled.len());
    }

    /// Steps that complete the current turn.
    #[must_use]
    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// Called after every applied step.
    #[must_use]
    pub fn on_step_applied(&self, ledger: &DieLedger, rolled: &Roll) -> TurnOutcome {
        if ledger.is_exhausted(rolled) || ledger.len() >= self.step_limit {
            TurnOutcome::Advance
        } else {
            TurnOutcome::Continue
        }
    }

    /// Hand the turn over: advance player, roll, reset the ledger and fetch
    /// fresh options, in that order. Returns the new options.
    pub fn advance<E: RulesEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        ledger: &mut DieLedger,
    ) -> Vec<LegalOption> {
        engine.advance_turn();
        engine.roll_dice();
        ledger.reset();

        let player = engine.current_player().clone();
        let rolled = engine.rolled_dice().clone();
        let options = engine.enumerate_legal_options(&player, &rolled);
        self.prepare(&options, &rolled);

        info!(
            player = %player,
            dice = %rolled,
            options = options.len(),
            "turn advanced"
        );
        options
    }
}
