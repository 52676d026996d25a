//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Backgammon always has two players:
//! `PlayerId(0)` and `PlayerId(1)`.
//!
//! ## Player
//!
//! Identity plus the board orientation the player moves in: piece color,
//! direction of travel, home quadrant and bar entry position.
//!
//! ## PlayerMap
//!
//! Fixed two-seat storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::point::{PointIndex, Position};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0 % 2)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Piece color. This is the owner identity the board reports per point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Direction of travel along the point indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Moves from low indices towards 23.
    Ascending,
    /// Moves from high indices towards 0.
    Descending,
}

impl Direction {
    /// Signed unit step along the position line.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }
}

/// A seated player: identity and board orientation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: Color,
    pub direction: Direction,
    /// Home quadrant, inclusive bounds (low, high).
    pub home: (PointIndex, PointIndex),
    /// Position pieces enter from when leaving the bar.
    pub entry: Position,
}

impl Player {
    /// Position pieces are borne off to. Opposite end from `entry`.
    #[must_use]
    pub fn bear_off(&self) -> Position {
        match self.direction {
            Direction::Ascending => Position::HIGH_EDGE,
            Direction::Descending => Position::LOW_EDGE,
        }
    }

    /// Is `point` inside this player's home quadrant?
    #[must_use]
    pub fn is_home(&self, point: PointIndex) -> bool {
        (self.home.0..=self.home.1).contains(&point)
    }

    /// Pips from `from` to this player's bear-off position.
    #[must_use]
    pub fn pips_to_bear_off(&self, from: Position) -> u8 {
        from.distance(self.bear_off())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

/// Per-seat storage for the two players, indexed by `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Entry for `player`, or None if the id is not seated.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.seats.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> From<[T; 2]> for PlayerMap<T> {
    fn from(seats: [T; 2]) -> Self {
        Self { seats }
    }
}

/// Panics if `player` is not seated. Use `get` for untrusted ids.
impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}
