//! Configuration types.
//!
//! - `GameSetup`: seed and seating for the rules engine
//! - `ControllerConfig`: hit-test geometry and move matching policy
//! - `AppConfig`: both, loadable from TOML
//!
//! Every section has defaults, so an empty TOML document is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::player::{Color, Direction, Player, PlayerId};
use super::point::{PointIndex, Position};
use crate::error::ConfigError;

/// Seat configuration for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub id: u8,
    pub name: String,
    pub color: Color,
    pub direction: Direction,
    /// Inclusive home quadrant bounds.
    pub home: (u8, u8),
    /// Bar entry position on the extended line (-1 or 24).
    pub entry: i8,
}

impl PlayerConfig {
    /// White: ascending, home 18..=23, enters from -1.
    #[must_use]
    pub fn white() -> Self {
        Self {
            id: 0,
            name: "White".into(),
            color: Color::White,
            direction: Direction::Ascending,
            home: (18, 23),
            entry: Position::LOW_EDGE.0,
        }
    }

    /// Black: descending, home 0..=5, enters from 24.
    #[must_use]
    pub fn black() -> Self {
        Self {
            id: 1,
            name: "Black".into(),
            color: Color::Black,
            direction: Direction::Descending,
            home: (0, 5),
            entry: Position::HIGH_EDGE.0,
        }
    }

    /// Build the seated player, checking ranges.
    pub fn to_player(&self) -> Result<Player, ConfigError> {
        let bound = |index: u8| {
            PointIndex::new(index).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "players.{}: home point {index} out of range",
                    self.name
                ))
            })
        };
        let home = (bound(self.home.0)?, bound(self.home.1)?);
        if home.0 > home.1 {
            return Err(ConfigError::Validation(format!(
                "players.{}: home bounds are reversed",
                self.name
            )));
        }

        let entry = Position(self.entry);
        let expected_entry = match self.direction {
            Direction::Ascending => Position::LOW_EDGE,
            Direction::Descending => Position::HIGH_EDGE,
        };
        if entry != expected_entry {
            return Err(ConfigError::Validation(format!(
                "players.{}: entry must be {} for {:?} movement",
                self.name, expected_entry.0, self.direction
            )));
        }

        Ok(Player {
            id: PlayerId::new(self.id),
            name: self.name.clone(),
            color: self.color,
            direction: self.direction,
            home,
            entry,
        })
    }
}

/// Rules engine setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSetup {
    /// Dice seed. Same seed, same game.
    pub seed: u64,
    /// Seats in turn order. The first seat moves first.
    pub players: Vec<PlayerConfig>,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            seed: 42,
            players: vec![PlayerConfig::white(), PlayerConfig::black()],
        }
    }
}

impl GameSetup {
    /// Validate and build the two seated players.
    pub fn seated_players(&self) -> Result<[Player; 2], ConfigError> {
        let [first, second] = self.players.as_slice() else {
            return Err(ConfigError::Validation(format!(
                "game.players must have exactly 2 entries, got {}",
                self.players.len()
            )));
        };
        let first = first.to_player()?;
        let second = second.to_player()?;

        if first.id.index() != 0 || second.id.index() != 1 {
            return Err(ConfigError::Validation(
                "game.players ids must be 0 and 1 in seat order".into(),
            ));
        }
        if first.color == second.color {
            return Err(ConfigError::Validation(
                "game.players must have different colors".into(),
            ));
        }
        if first.direction == second.direction {
            return Err(ConfigError::Validation(
                "game.players must move in opposite directions".into(),
            ));
        }
        Ok([first, second])
    }
}

/// Pixel geometry used to hit-test clicks against points.
///
/// Two rows of twelve points with a bar gap after the sixth column, inset
/// by `board_edge` on every side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardGeometry {
    pub width: f32,
    pub height: f32,
    pub point_width: f32,
    pub point_height: f32,
    pub bar_width: f32,
    pub board_edge: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            point_width: 50.0,
            point_height: 200.0,
            bar_width: 100.0,
            board_edge: 20.0,
        }
    }
}

impl BoardGeometry {
    /// Validate dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("width", self.width),
            ("height", self.height),
            ("point_width", self.point_width),
            ("point_height", self.point_height),
        ];
        for (name, value) in dims {
            if !(value > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "geometry.{name} must be > 0"
                )));
            }
        }
        if self.bar_width < 0.0 || self.board_edge < 0.0 {
            return Err(ConfigError::Validation(
                "geometry.bar_width and geometry.board_edge must be >= 0".into(),
            ));
        }

        let needed_width = 2.0 * self.board_edge + 12.0 * self.point_width + self.bar_width;
        if needed_width > self.width {
            return Err(ConfigError::Validation(format!(
                "geometry.width {} is too small for the points and bar ({needed_width})",
                self.width
            )));
        }
        let needed_height = 2.0 * self.board_edge + 2.0 * self.point_height;
        if needed_height > self.height {
            return Err(ConfigError::Validation(format!(
                "geometry.height {} is too small for two rows ({needed_height})",
                self.height
            )));
        }
        Ok(())
    }
}

/// How a single step is matched against the turn's legal options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// A step is legal if any option contains it, regardless of the steps
    /// already applied. Allows stranding the turn.
    #[default]
    AnyOption,
    /// A step is legal only if the steps applied so far plus this one are a
    /// prefix of some option. Every accepted step keeps a completion reachable.
    Committed,
}

/// Interactive controller configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub geometry: BoardGeometry,
    pub match_policy: MatchPolicy,
}

impl ControllerConfig {
    /// Builder: set the match policy.
    #[must_use]
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Builder: set the geometry.
    #[must_use]
    pub fn with_geometry(mut self, geometry: BoardGeometry) -> Self {
        self.geometry = geometry;
        self
    }
}

/// Top-level configuration, loadable from TOML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameSetup,
    pub controller: ControllerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller.geometry.validate()?;
        self.game.seated_players()?;
        Ok(())
    }
}
