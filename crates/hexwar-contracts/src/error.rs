//! The engine's error-kind taxonomy (§7). One flat enum shared by the
//! world model, rules engine, move processor, and editor core — callers
//! translate these into UI strings or protocol errors at the boundary;
//! the engine never formats messages for display.

use std::fmt;

/// An error raised by a core engine operation. No operation panics on an
/// expected-failure path; invariant violations (the two unit indices
/// disagreeing) are programmer errors and are not represented here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No unit at the referenced coord.
    NoSuchUnit,
    /// The referenced unit is not owned by the current player.
    WrongPlayer,
    /// Path invalid, destination occupied, or impassable terrain.
    InvalidMove { reason: String },
    /// Movement cost exceeds the unit's remaining `distance_left`.
    InsufficientMovement { need: i32, have: i32 },
    /// Same-player target, out of range, or pairing forbidden.
    InvalidAttack { reason: String },
    /// Terrain/unit/matrix entry missing from the rules catalog.
    UnknownRule { key: String },
    /// Editor operation attempted without an active map.
    NoMap,
    /// Editor operation attempted without an active world.
    NoWorld,
    /// Editor hex not within the current map's tile set.
    OutOfBounds,
    /// `delete_tile` was called on a coord where a unit currently stands.
    TileOccupied,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoSuchUnit => write!(f, "no unit at the referenced coordinate"),
            EngineError::WrongPlayer => write!(f, "unit is not owned by the current player"),
            EngineError::InvalidMove { reason } => write!(f, "invalid move: {reason}"),
            EngineError::InsufficientMovement { need, have } => write!(
                f,
                "insufficient movement: need {need}, have {have}"
            ),
            EngineError::InvalidAttack { reason } => write!(f, "invalid attack: {reason}"),
            EngineError::UnknownRule { key } => {
                write!(f, "unknown rule catalog entry: {key}")
            }
            EngineError::NoMap => write!(f, "no active map"),
            EngineError::NoWorld => write!(f, "no active world"),
            EngineError::OutOfBounds => write!(f, "coordinate is out of bounds"),
            EngineError::TileOccupied => write!(f, "tile is occupied by a unit"),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = EngineError::InvalidMove {
            reason: "destination occupied".to_string(),
        };
        assert_eq!(err.to_string(), "invalid move: destination occupied");
    }

    #[test]
    fn insufficient_movement_display() {
        let err = EngineError::InsufficientMovement { need: 3, have: 1 };
        assert_eq!(err.to_string(), "insufficient movement: need 3, have 1");
    }
}
