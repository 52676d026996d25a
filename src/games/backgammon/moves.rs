//! Single-step generation, validation and whole-turn enumeration.
//!
//! All functions here are pure over a `Board` and a `Player`; the game
//! wraps them with turn and dice bookkeeping.

use rustc_hash::FxHashSet;

use crate::core::board::{Board, BoardView};
use crate::core::dice::{DiceVec, DieValue, Roll};
use crate::core::player::Player;
use crate::core::point::{PointIndex, Position};
use crate::core::step::{LegalOption, Step};
use crate::error::StepError;

/// Where a piece lands after moving `die` pips from `origin`.
enum Landing {
    Point(PointIndex),
    /// At or past the bear-off edge.
    Off,
}

fn landing(player: &Player, origin: Position, die: DieValue) -> Landing {
    let target = i16::from(origin.0) + i16::from(player.direction.sign()) * i16::from(die);
    match u8::try_from(target).ok().and_then(PointIndex::new) {
        Some(point) => Landing::Point(point),
        None => Landing::Off,
    }
}

/// Are all of the player's pieces in the home quadrant?
pub(crate) fn all_home(board: &Board, player: &Player) -> bool {
    board.bar_count(player.color) == 0
        && board
            .occupied_by(player.color)
            .all(|point| player.is_home(point))
}

/// Does the player have a piece further from bearing off than `origin`?
fn has_piece_behind(board: &Board, player: &Player, origin: Position) -> bool {
    let pips = player.pips_to_bear_off(origin);
    board
        .occupied_by(player.color)
        .any(|point| player.pips_to_bear_off(point.into()) > pips)
}

/// Every legal single step spending `die`.
pub(crate) fn single_steps(board: &Board, player: &Player, die: DieValue) -> Vec<Step> {
    let color = player.color;

    if board.bar_count(color) > 0 {
        return match landing(player, player.entry, die) {
            Landing::Point(point) if !board.is_blocked_for(point, color) => {
                let mut step = Step::new(player.entry, point.into(), die);
                step.is_capture = board.is_blot_against(point, color);
                vec![step]
            }
            _ => Vec::new(),
        };
    }

    let can_bear_off = all_home(board, player);
    let mut steps = Vec::new();
    for point in board.occupied_by(color) {
        let origin = Position::from(point);
        match landing(player, origin, die) {
            Landing::Point(dest) => {
                if !board.is_blocked_for(dest, color) {
                    let mut step = Step::new(origin, dest.into(), die);
                    step.is_capture = board.is_blot_against(dest, color);
                    steps.push(step);
                }
            }
            Landing::Off if can_bear_off => {
                let pips = player.pips_to_bear_off(origin);
                if die == pips || !has_piece_behind(board, player, origin) {
                    steps.push(Step::new(origin, player.bear_off(), die));
                }
            }
            Landing::Off => {}
        }
    }
    steps
}

/// Check a step against the board. Returns the validated step with its
/// capture flag recomputed from the board.
pub(crate) fn validate(board: &Board, player: &Player, step: &Step) -> Result<Step, StepError> {
    let color = player.color;
    let origin = step.origin;
    let destination = step.destination;

    let entering = origin == player.entry;
    if board.bar_count(color) > 0 && !entering {
        return Err(StepError::MustEnterFromBar);
    }
    let owned = if entering {
        board.bar_count(color) > 0
    } else {
        origin.point().is_some_and(|p| board.is_owned_by(p, color))
    };
    if !owned {
        return Err(StepError::OriginNotOwned { origin });
    }

    let travel = (i16::from(destination.0) - i16::from(origin.0)) * i16::from(player.direction.sign());
    if travel <= 0 {
        return Err(StepError::WrongDirection {
            origin,
            destination,
        });
    }

    if destination == player.bear_off() {
        if !all_home(board, player) {
            return Err(StepError::BearOffNotAllowed);
        }
        let pips = player.pips_to_bear_off(origin);
        if step.die < pips {
            return Err(StepError::DistanceMismatch {
                distance: pips,
                die: step.die,
            });
        }
        if step.die > pips && has_piece_behind(board, player, origin) {
            return Err(StepError::OversizedBearOff { die: step.die });
        }
        return Ok(Step::new(origin, destination, step.die));
    }

    let Some(point) = destination.point() else {
        return Err(StepError::WrongDirection {
            origin,
            destination,
        });
    };
    let distance = origin.distance(destination);
    if distance != step.die {
        return Err(StepError::DistanceMismatch {
            distance,
            die: step.die,
        });
    }
    if board.is_blocked_for(point, color) {
        return Err(StepError::Blocked { destination });
    }

    let mut checked = Step::new(origin, destination, step.die);
    checked.is_capture = board.is_blot_against(point, color);
    Ok(checked)
}

/// Move the piece. The step must already be validated.
pub(crate) fn apply(board: &mut Board, player: &Player, step: &Step) {
    let color = player.color;
    match step.origin.point() {
        Some(point) => {
            board.lift(point);
        }
        None => {
            board.take_from_bar(color);
        }
    }
    match step.destination.point() {
        Some(point) => {
            board.drop_piece(point, color);
        }
        None => board.bear_off(color),
    }
}

/// Every complete way to play `roll`.
///
/// Only sequences using the most dice are kept. If only one die can be
/// played and the two dice differ, the larger must be played when possible.
pub(crate) fn enumerate(board: &Board, player: &Player, roll: &Roll) -> Vec<LegalOption> {
    if roll.is_empty() {
        return Vec::new();
    }

    let mut sequences = Vec::new();
    let mut path = Vec::with_capacity(roll.len());
    search(board, player, roll.values().into(), &mut path, &mut sequences);

    let longest = sequences.iter().map(Vec::len).max().unwrap_or(0);
    if longest == 0 {
        return Vec::new();
    }
    sequences.retain(|s| s.len() == longest);

    if longest == 1 && !roll.is_double() {
        if let Some(largest) = sequences.iter().map(|s| s[0].die).max() {
            sequences.retain(|s| s[0].die == largest);
        }
    }

    let mut seen = FxHashSet::default();
    let mut options = Vec::new();
    for sequence in sequences {
        let option = LegalOption::new(&sequence);
        if seen.insert(option.clone()) {
            options.push(option);
        }
    }
    options
}

fn search(
    board: &Board,
    player: &Player,
    remaining: DiceVec,
    path: &mut Vec<Step>,
    out: &mut Vec<Vec<Step>>,
) {
    let mut tried: DiceVec = DiceVec::new();
    let mut extended = false;

    for (index, &die) in remaining.iter().enumerate() {
        if tried.contains(&die) {
            continue;
        }
        tried.push(die);

        let mut rest = remaining.clone();
        rest.remove(index);

        for step in single_steps(board, player, die) {
            extended = true;
            let mut next = board.clone();
            apply(&mut next, player, &step);
            path.push(step);
            search(&next, player, rest.clone(), path, out);
            path.pop();
        }
    }

    if !extended && !path.is_empty() {
        out.push(path.clone());
    }
}

/// Total pips the player needs to bear everything off.
pub(crate) fn pip_count(board: &Board, player: &Player) -> u32 {
    let on_points: u32 = board
        .occupied_by(player.color)
        .map(|point| {
            u32::from(board.piece_count(point)) * u32::from(player.pips_to_bear_off(point.into()))
        })
        .sum();
    let on_bar = u32::from(board.bar_count(player.color)) * u32::from(player.pips_to_bear_off(player.entry));
    on_points + on_bar
}
