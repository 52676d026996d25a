//! Interactive move resolution.
//!
//! The rules engine produces whole-turn options; a player clicks one step at
//! a time. `MoveController` bridges the two:
//!
//! - `addressing`: screen position -> point index
//! - `selection`: two-state click protocol
//! - `legality`: match a click-pair against the turn's options
//! - `ledger`: die values spent this turn
//! - `turn`: detect the end of a turn and hand it back to the engine
//!
//! ## Flow
//!
//! pointer down -> locate -> selection transition -> (on second click)
//! legality filter -> `apply_step` on the engine -> ledger -> turn advancer.
//!
//! The controller owns exactly the selection, the ledger, the cached options
//! and the steps applied this turn. Board, dice and turn order stay with the
//! engine, which is passed in on every call.

pub mod addressing;
pub mod selection;
pub mod legality;
pub mod ledger;
pub mod turn;

pub use addressing::{PointLayout, PointerPos, Rect};
pub use selection::{Selection, SelectionEvent};
pub use legality::{LegalityFilter, TurnSnapshot};
pub use ledger::DieLedger;
pub use turn::{TurnAdvancer, TurnOutcome};

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::core::config::{ControllerConfig, MatchPolicy};
use crate::core::dice::{DiceVec, DieValue};
use crate::core::point::PointIndex;
use crate::core::step::{LegalOption, Step};
use crate::error::{PassError, Rejection};
use crate::rules::RulesEngine;

/// What a pointer-down did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No state changed.
    Ignored,
    /// An origin point is now selected.
    Selected(PointIndex),
    /// The selection was cancelled without a move attempt.
    Deselected,
    /// A step was applied.
    Moved { step: Step, turn: TurnOutcome },
    /// A move attempt was refused. Selection is cleared, nothing was mutated.
    Rejected(Rejection),
}

/// Per-session click-to-step controller.
///
/// ## Example
///
/// ```
/// use rust_backgammon::controller::{ClickOutcome, MoveController};
/// use rust_backgammon::core::ControllerConfig;
/// use rust_backgammon::games::backgammon::BackgammonGameBuilder;
///
/// let mut game = BackgammonGameBuilder::new().seed(1).build().unwrap();
/// let mut controller = MoveController::new(ControllerConfig::default());
/// controller.begin_turn(&mut game);
///
/// // A click in the frame does nothing while idle.
/// let outcome = controller.handle_pointer_down(&mut game, (5.0, 5.0).into());
/// assert_eq!(outcome, ClickOutcome::Ignored);
/// ```
#[derive(Clone, Debug)]
pub struct MoveController {
    layout: PointLayout,
    filter: LegalityFilter,
    selection: Selection,
    ledger: DieLedger,
    options: Vec<LegalOption>,
    applied: SmallVec<[Step; 4]>,
    advancer: TurnAdvancer,
    turn_started: bool,
}

impl MoveController {
    /// Create a controller. Call `begin_turn` before the first click, or let
    /// the first click do it.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            layout: PointLayout::from_geometry(&config.geometry),
            filter: LegalityFilter::new(config.match_policy),
            selection: Selection::NoSelection,
            ledger: DieLedger::new(),
            options: Vec::new(),
            applied: SmallVec::new(),
            advancer: TurnAdvancer::new(),
            turn_started: false,
        }
    }

    /// Start the engine's current turn: roll if needed, fetch options and
    /// clear per-turn bookkeeping.
    pub fn begin_turn<E: RulesEngine + ?Sized>(&mut self, engine: &mut E) {
        if engine.rolled_dice().is_empty() {
            engine.roll_dice();
        }
        let player = engine.current_player().clone();
        let rolled = engine.rolled_dice().clone();

        self.selection = Selection::NoSelection;
        self.ledger.reset();
        self.applied.clear();
        self.options = engine.enumerate_legal_options(&player, &rolled);
        self.advancer.prepare(&self.options, &rolled);
        self.turn_started = true;

        info!(
            player = %player,
            dice = %rolled,
            options = self.options.len(),
            "turn started"
        );
    }

    /// Sole input entry point. Never fails: rejections come back as
    /// `ClickOutcome::Rejected`.
    pub fn handle_pointer_down<E: RulesEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        pos: PointerPos,
    ) -> ClickOutcome {
        if !self.turn_started {
            self.begin_turn(engine);
        }

        let clicked = self.layout.locate(pos);
        let mover = engine.current_player().color;
        let (next, event) = self
            .selection
            .on_click(clicked, |point| engine.is_owned_by(point, mover));
        self.selection = next;

        match event {
            SelectionEvent::Ignore => ClickOutcome::Ignored,
            SelectionEvent::Select(point) => {
                debug!(%point, "origin selected");
                ClickOutcome::Selected(point)
            }
            SelectionEvent::Deselect => {
                debug!("selection cancelled");
                ClickOutcome::Deselected
            }
            SelectionEvent::Attempt {
                origin,
                destination,
            } => match self.attempt_move(engine, origin, destination) {
                Ok((step, turn)) => ClickOutcome::Moved { step, turn },
                Err(rejection) => {
                    if rejection.is_user_facing() {
                        debug!(%origin, %destination, %rejection, "move rejected");
                    } else {
                        warn!(%origin, %destination, %rejection, "engine refused a filtered step");
                    }
                    ClickOutcome::Rejected(rejection)
                }
            },
        }
    }

    /// Validate, apply and account for one step.
    fn attempt_move<E: RulesEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        origin: PointIndex,
        destination: PointIndex,
    ) -> Result<(Step, TurnOutcome), Rejection> {
        let player = engine.current_player().clone();
        let rolled = engine.rolled_dice().clone();

        let turn = TurnSnapshot {
            options: &self.options,
            applied: &self.applied,
            rolled: &rolled,
            used: self.ledger.used(),
        };
        let step = self
            .filter
            .evaluate(origin, destination, &turn, &*engine, player.color)?;
        engine.apply_step(&player, &step)?;

        self.ledger.record_use(step.die);
        self.applied.push(step);
        debug!(%step, used = ?self.ledger.used(), "step applied");

        let outcome = self.advancer.on_step_applied(&self.ledger, &rolled);
        if outcome == TurnOutcome::Advance {
            self.hand_over(engine);
        }
        Ok((step, outcome))
    }

    /// Forfeit the rest of the turn.
    ///
    /// Allowed once no option can be continued by a click: the roll has no
    /// option, the steps played have left every option, or each option's
    /// next step enters from the bar, bears off, or starts from a point the
    /// mover no longer holds.
    pub fn pass_turn<E: RulesEngine + ?Sized>(&mut self, engine: &mut E) -> Result<(), PassError> {
        if !self.turn_started {
            self.begin_turn(engine);
        }
        let playable = self.playable_steps(engine);
        if playable > 0 {
            return Err(PassError::MovesAvailable { playable });
        }

        info!(
            player = %engine.current_player(),
            dice = %engine.rolled_dice(),
            options = self.options.len(),
            applied = self.applied.len(),
            "no playable moves, passing"
        );
        self.hand_over(engine);
        Ok(())
    }

    /// Can the player on move end the turn with `pass_turn` right now?
    #[must_use]
    pub fn can_pass<E: RulesEngine + ?Sized>(&self, engine: &E) -> bool {
        self.playable_steps(engine) == 0
    }

    /// Options whose next step can still be clicked.
    fn playable_steps<E: RulesEngine + ?Sized>(&self, engine: &E) -> usize {
        let mover = engine.current_player().color;
        let available = self.ledger.available(engine.rolled_dice());
        self.options
            .iter()
            .filter_map(|option| option.steps.get(self.applied.len()).map(|next| (option, next)))
            .filter(|(option, next)| {
                let (Some(origin), Some(_)) = (next.origin.point(), next.destination.point()) else {
                    return false;
                };
                option.extends_prefix(&self.applied, next.origin, next.destination)
                    && engine.is_owned_by(origin, mover)
                    && available.contains(&next.distance())
            })
            .count()
    }

    fn hand_over<E: RulesEngine + ?Sized>(&mut self, engine: &mut E) {
        self.selection = Selection::NoSelection;
        self.applied.clear();
        self.options = self.advancer.advance(engine, &mut self.ledger);
    }

    // === Snapshots ===

    /// Current selection, for highlighting.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Rolled values not yet spent this turn.
    #[must_use]
    pub fn available_dice<E: RulesEngine + ?Sized>(&self, engine: &E) -> DiceVec {
        self.ledger.available(engine.rolled_dice())
    }

    /// Values spent this turn, in order.
    #[must_use]
    pub fn used_dice(&self) -> &[DieValue] {
        self.ledger.used()
    }

    /// The turn's cached options.
    #[must_use]
    pub fn legal_options(&self) -> &[LegalOption] {
        &self.options
    }

    /// Steps applied this turn, in order.
    #[must_use]
    pub fn applied_steps(&self) -> &[Step] {
        &self.applied
    }

    /// Can the player on move do anything this turn?
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        !self.options.is_empty()
    }

    /// Hit-test layout, shared with renderers.
    #[must_use]
    pub fn layout(&self) -> &PointLayout {
        &self.layout
    }

    /// Move matching policy in effect.
    #[must_use]
    pub fn match_policy(&self) -> MatchPolicy {
        self.filter.policy()
    }
}

impl Default for MoveController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
