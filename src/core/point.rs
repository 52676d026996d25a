//! Board coordinates.
//!
//! ## PointIndex
//!
//! One of the 24 canonical points, 0..=23. This is what a click resolves to.
//!
//! ## Position
//!
//! The engine's extended coordinate line, -1..=24. The two ends stand for the
//! spots just off the playing area: White enters from -1 and bears off to 24,
//! Black enters from 24 and bears off to -1. Every step distance is measured
//! on this line as `|origin - destination|`.

use serde::{Deserialize, Serialize};

/// Number of points on the board.
pub const POINT_COUNT: usize = 24;

/// Canonical point index in 0..=23.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PointIndex(u8);

impl PointIndex {
    /// Create a point index, or `None` if `index` is off the board.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < POINT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 24 points in index order.
    pub fn all() -> impl Iterator<Item = PointIndex> {
        (0..POINT_COUNT as u8).map(PointIndex)
    }
}

impl TryFrom<u8> for PointIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("point index {value} out of range 0..=23"))
    }
}

impl From<PointIndex> for u8 {
    fn from(point: PointIndex) -> Self {
        point.0
    }
}

impl std::fmt::Display for PointIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({})", self.0)
    }
}

/// Position on the engine's extended coordinate line (-1..=24).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub i8);

impl Position {
    /// The low end of the line (White's entry, Black's bear-off).
    pub const LOW_EDGE: Position = Position(-1);

    /// The high end of the line (Black's entry, White's bear-off).
    pub const HIGH_EDGE: Position = Position(POINT_COUNT as i8);

    /// The point at this position, if it is on the board.
    #[must_use]
    pub fn point(self) -> Option<PointIndex> {
        u8::try_from(self.0).ok().and_then(PointIndex::new)
    }

    /// Is this one of the two off-board ends?
    #[must_use]
    pub const fn is_edge(self) -> bool {
        self.0 == Self::LOW_EDGE.0 || self.0 == Self::HIGH_EDGE.0
    }

    /// Distance between two positions.
    #[must_use]
    pub fn distance(self, other: Position) -> u8 {
        (i16::from(self.0) - i16::from(other.0)).unsigned_abs() as u8
    }

    /// Move `delta` pips along the line. Returns `None` past either edge.
    #[must_use]
    pub fn offset(self, delta: i8) -> Option<Position> {
        let next = self.0.checked_add(delta)?;
        (Self::LOW_EDGE.0..=Self::HIGH_EDGE.0)
            .contains(&next)
            .then_some(Position(next))
    }
}

impl From<PointIndex> for Position {
    fn from(point: PointIndex) -> Self {
        Position(point.0 as i8)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.point() {
            Some(point) => write!(f, "{point}"),
            None => write!(f, "Edge({})", self.0),
        }
    }
}
