//! Error types.
//!
//! None of these are fatal. Move rejections are reported back through the
//! click outcome and the controller returns to its idle state.

use std::path::PathBuf;

use crate::core::{DieValue, PlayerId, PointIndex, Position};

/// Structural failures reported by the rules engine when applying a step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("{got} moved out of turn ({expected} is on move)")]
    WrongPlayer { expected: PlayerId, got: PlayerId },

    #[error("dice have not been rolled")]
    NotRolled,

    #[error("die {die} is not available this turn")]
    DieNotAvailable { die: DieValue },

    #[error("no piece of the moving player at {origin}")]
    OriginNotOwned { origin: Position },

    #[error("pieces on the bar must enter before other moves")]
    MustEnterFromBar,

    #[error("moving backwards from {origin} to {destination}")]
    WrongDirection { origin: Position, destination: Position },

    #[error("distance {distance} does not match die {die}")]
    DistanceMismatch { distance: u8, die: DieValue },

    #[error("destination {destination} is blocked")]
    Blocked { destination: Position },

    #[error("cannot bear off while pieces are outside the home board")]
    BearOffNotAllowed,

    #[error("die {die} overshoots while a piece sits further back")]
    OversizedBearOff { die: DieValue },
}

/// Why a proposed click-pair move was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// No remaining die covers the distance.
    #[error("no available die for distance {distance} (available: {available:?})")]
    NoMatchingDie {
        distance: u8,
        available: Vec<DieValue>,
    },

    /// No legal option contains the move.
    #[error("move {origin} -> {destination} is not in the legal options")]
    NotInLegalSet {
        origin: PointIndex,
        destination: PointIndex,
    },

    /// The filter accepted the step but the engine refused it.
    ///
    /// Indicates filter/engine state divergence, not player error.
    #[error("engine rejected an accepted step: {0}")]
    Structural(#[from] StepError),
}

impl Rejection {
    /// Is this a player-facing rejection (as opposed to a consistency fault)?
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Rejection::Structural(_))
    }
}

/// Why a turn could not be forfeited.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassError {
    #[error("cannot pass while {playable} options can still be continued")]
    MovesAvailable { playable: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
