//! Board state: point stacks, bar and borne-off trays.
//!
//! ## Board
//!
//! Owned by the rules engine. 24 point stacks, each holding zero or more
//! pieces of a single color, plus per-color bar and borne-off counts.
//!
//! ## BoardView
//!
//! Read-only occupancy queries. The interactive layer only ever sees the
//! board through this trait, so capture detection reads a snapshot taken
//! strictly before the step under evaluation is applied.

use serde::{Deserialize, Serialize};

use super::player::Color;
use super::point::{PointIndex, POINT_COUNT};

/// Pieces each color starts with.
pub const PIECES_PER_PLAYER: u8 = 15;

/// Read-only board occupancy.
pub trait BoardView {
    /// Color of the pieces on `point`, if any.
    fn piece_owner(&self, point: PointIndex) -> Option<Color>;

    /// Number of pieces on `point`.
    fn piece_count(&self, point: PointIndex) -> u8;

    /// Does `color` have at least one piece on `point`?
    fn is_owned_by(&self, point: PointIndex, color: Color) -> bool {
        self.piece_count(point) > 0 && self.piece_owner(point) == Some(color)
    }

    /// Is `point` a single opposing piece that `mover` would hit?
    fn is_blot_against(&self, point: PointIndex, mover: Color) -> bool {
        self.piece_count(point) == 1 && self.piece_owner(point) == Some(mover.opponent())
    }

    /// Is `point` closed to `mover` (two or more opposing pieces)?
    fn is_blocked_for(&self, point: PointIndex, mover: Color) -> bool {
        self.piece_count(point) >= 2 && self.piece_owner(point) == Some(mover.opponent())
    }
}

/// Pieces on one point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointStack {
    pub owner: Option<Color>,
    pub count: u8,
}

/// Complete board position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    points: [PointStack; POINT_COUNT],
    bar: [u8; 2],
    borne_off: [u8; 2],
}

const fn slot(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: [PointStack::default(); POINT_COUNT],
            bar: [0; 2],
            borne_off: [0; 2],
        }
    }

    /// The standard opening position.
    ///
    /// White moves towards 23 and starts with 2 on 0, 5 on 11, 3 on 16 and
    /// 5 on 18. Black mirrors it moving towards 0.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (index, count) in [(0u8, 2u8), (11, 5), (16, 3), (18, 5)] {
            board.place_raw(index, Color::White, count);
            board.place_raw(23 - index, Color::Black, count);
        }
        board
    }

    fn place_raw(&mut self, index: u8, color: Color, count: u8) {
        if let Some(point) = PointIndex::new(index) {
            self.place(point, color, count);
        }
    }

    /// Set a point's contents directly. A count of zero clears the point.
    pub fn place(&mut self, point: PointIndex, color: Color, count: u8) {
        self.points[point.index()] = if count == 0 {
            PointStack::default()
        } else {
            PointStack {
                owner: Some(color),
                count,
            }
        };
    }

    /// Get a point's stack.
    #[must_use]
    pub fn stack(&self, point: PointIndex) -> PointStack {
        self.points[point.index()]
    }

    /// Remove one piece from `point`. Returns the color lifted, if any.
    pub fn lift(&mut self, point: PointIndex) -> Option<Color> {
        let stack = &mut self.points[point.index()];
        let owner = stack.owner?;
        stack.count = stack.count.saturating_sub(1);
        if stack.count == 0 {
            stack.owner = None;
        }
        Some(owner)
    }

    /// Put one `color` piece on `point`.
    ///
    /// If the point held a single opposing piece, that piece goes to its
    /// bar and its color is returned.
    pub fn drop_piece(&mut self, point: PointIndex, color: Color) -> Option<Color> {
        let stack = self.points[point.index()];
        let hit = match stack.owner {
            Some(owner) if owner != color && stack.count == 1 => {
                self.bar[slot(owner)] += 1;
                Some(owner)
            }
            _ => None,
        };
        let stack = &mut self.points[point.index()];
        if hit.is_some() || stack.count == 0 {
            *stack = PointStack {
                owner: Some(color),
                count: 1,
            };
        } else {
            stack.count += 1;
        }
        hit
    }

    /// Pieces of `color` waiting on the bar.
    #[must_use]
    pub fn bar_count(&self, color: Color) -> u8 {
        self.bar[slot(color)]
    }

    /// Set the bar count directly.
    pub fn set_bar(&mut self, color: Color, count: u8) {
        self.bar[slot(color)] = count;
    }

    /// Take one `color` piece off the bar. Returns false if none was there.
    pub fn take_from_bar(&mut self, color: Color) -> bool {
        let count = &mut self.bar[slot(color)];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Pieces of `color` already borne off.
    #[must_use]
    pub fn borne_off(&self, color: Color) -> u8 {
        self.borne_off[slot(color)]
    }

    /// Record one `color` piece borne off.
    pub fn bear_off(&mut self, color: Color) {
        self.borne_off[slot(color)] += 1;
    }

    /// Points holding at least one `color` piece, in index order.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = PointIndex> + '_ {
        PointIndex::all().filter(move |&p| self.is_owned_by(p, color))
    }

    /// Pieces of `color` on the 24 points (excludes bar and tray).
    #[must_use]
    pub fn pieces_on_points(&self, color: Color) -> u8 {
        self.points
            .iter()
            .filter(|s| s.owner == Some(color))
            .map(|s| s.count)
            .sum()
    }

    /// Every `color` piece: points, bar and borne off.
    #[must_use]
    pub fn total_pieces(&self, color: Color) -> u8 {
        self.pieces_on_points(color) + self.bar_count(color) + self.borne_off(color)
    }
}

impl BoardView for Board {
    fn piece_owner(&self, point: PointIndex) -> Option<Color> {
        self.points[point.index()].owner
    }

    fn piece_count(&self, point: PointIndex) -> u8 {
        self.points[point.index()].count
    }
}
